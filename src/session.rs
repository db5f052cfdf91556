//! Live calculator session
//!
//! Holds the single input configuration and the recipe derived from it.
//! Every write replaces the configuration and recomputes the recipe before
//! returning, so any read after an edit sees the post-edit recipe.

use tracing::debug;

use crate::calculator::{RecipeCard, calculate_recipe};
use crate::models::{DerivedRecipe, Edit, InputConfiguration};

#[derive(Debug)]
pub struct Session {
    config: InputConfiguration,
    recipe: DerivedRecipe,
    recomputes: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(InputConfiguration::default())
    }
}

impl Session {
    /// Start a session; the initial load counts as the first recompute
    pub fn new(config: InputConfiguration) -> Self {
        Self {
            config,
            recipe: calculate_recipe(&config),
            recomputes: 1,
        }
    }

    pub fn config(&self) -> &InputConfiguration {
        &self.config
    }

    pub fn recipe(&self) -> &DerivedRecipe {
        &self.recipe
    }

    /// Number of recomputes since the session started
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    pub fn card(&self) -> RecipeCard {
        RecipeCard::new(&self.config, &self.recipe)
    }

    /// Apply one field edit and recompute
    pub fn apply(&mut self, edit: Edit) -> &DerivedRecipe {
        debug!(field = %edit.field(), ?edit, "applying edit");
        self.replace(self.config.with(edit))
    }

    pub fn toggle_fridge_proof(&mut self) -> &DerivedRecipe {
        self.apply(Edit::FridgeProof(!self.config.fridge_proof))
    }

    /// Restore startup defaults
    pub fn reset(&mut self) -> &DerivedRecipe {
        self.replace(InputConfiguration::default())
    }

    fn replace(&mut self, config: InputConfiguration) -> &DerivedRecipe {
        self.config = config;
        self.recipe = calculate_recipe(&self.config);
        self.recomputes += 1;
        &self.recipe
    }
}
