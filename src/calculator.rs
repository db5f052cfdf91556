//! Recipe calculator logic

use std::fmt;

use tracing::debug;

use crate::models::{DerivedRecipe, InputConfiguration};

const SALT_RATIO: f64 = 0.02;
const BULK_BASE_HOURS: f64 = 4.0;
const PROOF_BASE_HOURS: f64 = 2.0;
const FRIDGE_PROOF_HOURS: f64 = 12.0;
const REFERENCE_TEMP_C: f64 = 24.0;

/// Derive ingredient weights and fermentation times from the inputs
///
/// Total over all inputs: a zero or non-finite room temperature produces
/// infinite or NaN times rather than an error.
pub fn calculate_recipe(config: &InputConfiguration) -> DerivedRecipe {
    let flour = config.flour_amount;
    let water = config.flour_amount * config.hydration / 100.0;
    let starter = config.flour_amount * config.starter_amount / 100.0;
    let salt = config.flour_amount * SALT_RATIO;

    let bulk_time = BULK_BASE_HOURS * (REFERENCE_TEMP_C / config.room_temp);

    // Fridge holds its own temperature, so room temp does not apply
    let proof_time = if config.fridge_proof {
        FRIDGE_PROOF_HOURS
    } else {
        PROOF_BASE_HOURS * (REFERENCE_TEMP_C / config.room_temp)
    };

    debug!(
        flour_amount = config.flour_amount,
        hydration = config.hydration,
        starter_amount = config.starter_amount,
        room_temp = config.room_temp,
        fridge_proof = config.fridge_proof,
        bulk_time,
        proof_time,
        "recipe recomputed"
    );

    DerivedRecipe {
        flour,
        water,
        starter,
        salt,
        bulk_time,
        proof_time,
    }
}

/// Round to the nearest integer with halves going toward positive infinity.
///
/// NaN and infinities pass through, and negative zero is normalized to zero.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded + 0.0
}

/// Display-ready view of a derived recipe
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub flour: f64,
    pub water: f64,
    pub starter: f64,
    pub salt: f64,
    pub bulk_hours: f64,
    pub proof_hours: f64,
    pub in_fridge: bool,
    pub total_dough: f64,
}

impl RecipeCard {
    pub fn new(config: &InputConfiguration, recipe: &DerivedRecipe) -> Self {
        Self {
            // flour is shown as entered, minus the sign of a negative zero
            flour: recipe.flour + 0.0,
            water: round_half_up(recipe.water),
            starter: round_half_up(recipe.starter),
            salt: round_half_up(recipe.salt),
            bulk_hours: round_half_up(recipe.bulk_time),
            proof_hours: round_half_up(recipe.proof_time),
            in_fridge: config.fridge_proof,
            total_dough: total_dough_weight(recipe),
        }
    }
}

/// Total dough weight in whole grams
pub fn total_dough_weight(recipe: &DerivedRecipe) -> f64 {
    round_half_up(recipe.flour + recipe.water + recipe.starter + recipe.salt)
}

/// Render a display value, spelling infinities as `Infinity`
pub fn display_number(value: f64) -> String {
    if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for RecipeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Sourdough Recipe ===")?;
        writeln!(f, "Ingredients:")?;
        writeln!(f, "  Flour:   {}g", display_number(self.flour))?;
        writeln!(f, "  Water:   {}g", display_number(self.water))?;
        writeln!(f, "  Starter: {}g", display_number(self.starter))?;
        writeln!(f, "  Salt:    {}g", display_number(self.salt))?;
        writeln!(f)?;

        writeln!(f, "Timing:")?;
        writeln!(f, "  Bulk fermentation: {} hours", display_number(self.bulk_hours))?;
        if self.in_fridge {
            writeln!(
                f,
                "  Proofing:          {} hours (in fridge)",
                display_number(self.proof_hours)
            )?;
        } else {
            writeln!(f, "  Proofing:          {} hours", display_number(self.proof_hours))?;
        }
        writeln!(f)?;

        writeln!(f, "Total dough weight: {}g", display_number(self.total_dough))
    }
}

/// Format the unrounded stored values
pub fn format_raw_recipe(recipe: &DerivedRecipe) -> String {
    let mut output = String::new();
    output.push_str("Unrounded values:\n");
    output.push_str(&format!("  flour      {:.4} g\n", recipe.flour));
    output.push_str(&format!("  water      {:.4} g\n", recipe.water));
    output.push_str(&format!("  starter    {:.4} g\n", recipe.starter));
    output.push_str(&format!("  salt       {:.4} g\n", recipe.salt));
    output.push_str(&format!("  bulk_time  {:.4} h\n", recipe.bulk_time));
    output.push_str(&format!("  proof_time {:.4} h\n", recipe.proof_time));
    output
}
