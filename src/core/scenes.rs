//! Authored scene content and the read-only catalog the rounds index into.

use super::error::CatalogError;
use super::geometry::NormalizedPoint;
use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub identifier: &'static str,
    pub display_name: &'static str,
    pub answer_location: NormalizedPoint,
    pub narrative: &'static str,
    pub image_ref: &'static str,
}

pub const SCENES: &[Scene] = &[
    Scene {
        identifier: "miserables-sewers",
        display_name: "Les Misérables Sewers",
        answer_location: NormalizedPoint::new(25.0, 70.0),
        narrative: "For Valjean, the sewers were metaphorical for his path to freedom, representing the arduous journey one takes to freedom.\n\"Jean Valjean had escaped from the city\". However, as Valjean navigates the sewers there's little indication as to whether he's making progress, other than the slope. Hugo writes that it is a \"black labyrinth\", metaphorically implying the sewers don't lend themselves to progress.",
        image_ref: "miserables-sewer.jpg",
    },
    Scene {
        identifier: "limestone-quarries",
        display_name: "Limestone Quarries",
        answer_location: NormalizedPoint::new(66.0, 28.0),
        narrative: "The limestone mines afforded the city of Paris great progress in construction and architecture. However, for Charles-Axel Guillaumot, they represent an inescapable obsession turned into a tomb, where he continues to rest. For \"ten years, ... Guillaumot [walked] the silent streets of his subterranean realm\". The restrained freedom is true for the city of Paris, which for centuries continued to have to contend with the sinkholes caused by the legacy of its underground origins.",
        image_ref: "limestone.jpg",
    },
    Scene {
        identifier: "buttes-chaumont",
        display_name: "Parc Buttes Chaumont",
        answer_location: NormalizedPoint::new(72.0, 78.0),
        narrative: "The park is emblematic of the progress Parisians have made from a labor and export based economy and lifestyle, from when it was a gypsum quarry, then later to a wasteland, and finally to a more serene and service based lifestyle, affording them the freedom to enjoy their time on the grass.",
        image_ref: "chaumont.jpg",
    },
    Scene {
        identifier: "fossil",
        display_name: "Fossil",
        answer_location: NormalizedPoint::new(72.0, 13.0),
        narrative: "The ichthyosaurus lies deep in the strata beneath the city, fixed in stone long before Paris existed. It is the underground at its least free: preserved, immobile, and untouched by the progress happening above it.",
        image_ref: "ichthyosaurus.jpg",
    },
    Scene {
        identifier: "arcades",
        display_name: "Arcades",
        answer_location: NormalizedPoint::new(22.0, 84.0),
        narrative: "The creation of the arcades symbolizes the culture of leisure and consumerism that developed throughout the 19th century in Paris. The protection and lighting in the arcades enabled all-day socialization and shopping, and their beauty and the congregations of people gave rise to the flâneur of Paris, free to roam as they pleased. The arcades are also a symbol of the some of the progress undone during Haussmannization.",
        image_ref: "arcades.jpg",
    },
    Scene {
        identifier: "catacombs",
        display_name: "Catacombs",
        answer_location: NormalizedPoint::new(77.0, 27.0),
        narrative: "The catacombs speak to Parisian progress throughout the centuries towards more egalitarian views. While graves would have been decorated and only some celebrated, everyone in the catacombs was \"confounded like a shuffled pack of cards\", marking progress towards equality (The Empire of The Dead). The ossuary also reminds of the fact that no one is free from death: visitors quoted the poem that read \"Death has his rigorous laws\" (The Empire of The Dead).",
        image_ref: "catacombs.jpg",
    },
    Scene {
        identifier: "metro",
        display_name: "Metro",
        answer_location: NormalizedPoint::new(72.0, 54.0),
        narrative: "The metro was self-evidently a great work of progress for Parisian society, but it also speaks to the change to the modern pace of life, being intertwined with expressions like \"Métro, boulot, dodo.\"\n\nIt was also very freeing for the people of Paris, able to take them from one side \"to the other side of Paris in twenty-seven minutes\" as people were no longer limited to above ground transporatation. However, over time the metro became a metaphorical anchor for many, becoming nearly inescapable, with people falling into routines and tying memories to subway names. Marc Augé wrote that the Gare d'Orleans-Austerlitz-Auteuil \"would always play in [his] life.\"",
        image_ref: "metro.jpg",
    },
    Scene {
        identifier: "germinal-mines",
        display_name: "Mines from Germinal",
        answer_location: NormalizedPoint::new(72.0, 78.0),
        narrative: "The mines in Germinal are a clear metaphor for the opression of the working class; Zola for example emphasizes the \"cages\" through which miners descended, both physical and a metaphor for the miner's capitivty and lack of freedom. The mines are also the antithesis of progress. They outlast efforts in real life and in Zola's novel for better compensation and working conditions by the miners, staunchly refusing to progress for the betterment of the people.",
        image_ref: "germinal-mines.jpg",
    },
    Scene {
        identifier: "germinal-seeds",
        display_name: "Seeds from Germinal",
        answer_location: NormalizedPoint::new(72.0, 78.0),
        narrative: "A space of scientific wonder and boundless exploration, filled with potential rather than ruin.",
        image_ref: "seeds.jpg",
    },
    Scene {
        identifier: "andre-breton",
        display_name: "Andre Breton",
        answer_location: NormalizedPoint::new(72.0, 78.0),
        narrative: "A space of scientific wonder and boundless exploration, filled with potential rather than ruin.",
        image_ref: "scene-3.png",
    },
];

/// Ordered, immutable scene list with an identifier index.
#[derive(Clone, Debug)]
pub struct SceneCatalog {
    scenes: &'static [Scene],
    by_identifier: FnvHashMap<&'static str, usize>,
}

impl SceneCatalog {
    pub fn new(scenes: &'static [Scene]) -> Result<Self, CatalogError> {
        if scenes.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut by_identifier = FnvHashMap::default();
        for (i, scene) in scenes.iter().enumerate() {
            if by_identifier.insert(scene.identifier, i).is_some() {
                return Err(CatalogError::DuplicateIdentifier(scene.identifier.to_string()));
            }
        }
        Ok(Self {
            scenes,
            by_identifier,
        })
    }

    /// Catalog over the built-in [`SCENES`].
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(SCENES)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Scene> {
        self.scenes.get(index)
    }

    pub fn index_of(&self, identifier: &str) -> Option<usize> {
        self.by_identifier.get(identifier).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Scene> {
        self.scenes.iter()
    }
}
