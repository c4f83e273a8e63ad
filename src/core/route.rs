use super::error::RouteError;
use std::fmt;

/// Screens addressable from the location hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Round(usize),
    Ending,
}

impl Route {
    /// Parse a hash such as `#/scene/3`. The leading `#` is optional and an
    /// empty hash means home.
    pub fn parse(hash: &str) -> Result<Self, RouteError> {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        match path {
            "" => Ok(Route::Home),
            "/ending" => Ok(Route::Ending),
            _ => match path.strip_prefix("/scene/") {
                Some(n) => n
                    .parse::<usize>()
                    .map(Route::Round)
                    .map_err(|_| RouteError::InvalidRound(n.to_string())),
                None => Err(RouteError::Unknown(hash.to_string())),
            },
        }
    }

    /// Reject round routes past the end of a catalog of `len` scenes.
    pub fn checked(self, len: usize) -> Result<Self, RouteError> {
        match self {
            Route::Round(index) if index >= len => Err(RouteError::RoundOutOfRange { index, len }),
            other => Ok(other),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "#/"),
            Route::Round(n) => write!(f, "#/scene/{}", n),
            Route::Ending => write!(f, "#/ending"),
        }
    }
}
