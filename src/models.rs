//! Data models for recipe inputs and derived recipes

use std::fmt;

/// User-editable recipe inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputConfiguration {
    pub flour_amount: f64,   // grams
    pub flour_protein: f64,  // percent, stored but not used by any formula
    pub starter_amount: f64, // percent of flour
    pub room_temp: f64,      // degrees Celsius
    pub hydration: f64,      // percent of flour
    pub fridge_proof: bool,
}

impl Default for InputConfiguration {
    fn default() -> Self {
        Self {
            flour_amount: 1000.0,
            flour_protein: 12.5,
            starter_amount: 20.0,
            room_temp: 22.0,
            hydration: 75.0,
            fridge_proof: false,
        }
    }
}

impl InputConfiguration {
    /// Return a new configuration with a single field replaced
    pub fn with(&self, edit: Edit) -> Self {
        let mut next = *self;
        match edit {
            Edit::FlourAmount(v) => next.flour_amount = v,
            Edit::FlourProtein(v) => next.flour_protein = v,
            Edit::StarterAmount(v) => next.starter_amount = v,
            Edit::RoomTemp(v) => next.room_temp = v,
            Edit::Hydration(v) => next.hydration = v,
            Edit::FridgeProof(v) => next.fridge_proof = v,
        }
        next
    }
}

impl fmt::Display for InputConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Inputs ===")?;
        writeln!(f, "  Flour amount:  {}g", self.flour_amount)?;
        writeln!(f, "  Flour protein: {}%", self.flour_protein)?;
        writeln!(f, "  Starter:       {}% of flour", self.starter_amount)?;
        writeln!(f, "  Room temp:     {}°C", self.room_temp)?;
        writeln!(f, "  Hydration:     {}%", self.hydration)?;
        writeln!(
            f,
            "  Fridge proof:  {}",
            if self.fridge_proof { "yes" } else { "no" }
        )
    }
}

/// Ingredient weights and fermentation times derived from an input configuration.
///
/// Weights are in grams and times in hours. Values are stored unrounded;
/// rounding happens only when a [`crate::calculator::RecipeCard`] is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRecipe {
    pub flour: f64,
    pub water: f64,
    pub starter: f64,
    pub salt: f64,
    pub bulk_time: f64,
    pub proof_time: f64,
}

/// The editable fields of an [`InputConfiguration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FlourAmount,
    FlourProtein,
    StarterAmount,
    RoomTemp,
    Hydration,
    FridgeProof,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FlourAmount,
        Field::FlourProtein,
        Field::StarterAmount,
        Field::RoomTemp,
        Field::Hydration,
        Field::FridgeProof,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::FlourAmount => "flour-amount",
            Field::FlourProtein => "flour-protein",
            Field::StarterAmount => "starter-amount",
            Field::RoomTemp => "room-temp",
            Field::Hydration => "hydration",
            Field::FridgeProof => "fridge-proof",
        }
    }

    /// Short name accepted in interactive sessions
    pub fn short_name(self) -> &'static str {
        match self {
            Field::FlourAmount => "flour",
            Field::FlourProtein => "protein",
            Field::StarterAmount => "starter",
            Field::RoomTemp => "temp",
            Field::Hydration => "hydration",
            Field::FridgeProof => "fridge",
        }
    }

    pub fn is_flag(self) -> bool {
        matches!(self, Field::FridgeProof)
    }

    /// Resolve a field from its canonical name, short name, or a
    /// snake_case / camelCase spelling of the canonical name
    pub fn from_name(name: &str) -> Option<Field> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        Field::ALL.into_iter().find(|field| {
            normalized == field.name().replace('-', "") || normalized == field.short_name()
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single field assignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    FlourAmount(f64),
    FlourProtein(f64),
    StarterAmount(f64),
    RoomTemp(f64),
    Hydration(f64),
    FridgeProof(bool),
}

impl Edit {
    pub fn field(&self) -> Field {
        match self {
            Edit::FlourAmount(_) => Field::FlourAmount,
            Edit::FlourProtein(_) => Field::FlourProtein,
            Edit::StarterAmount(_) => Field::StarterAmount,
            Edit::RoomTemp(_) => Field::RoomTemp,
            Edit::Hydration(_) => Field::Hydration,
            Edit::FridgeProof(_) => Field::FridgeProof,
        }
    }

    /// Build a numeric edit for `field`. Returns `None` for the fridge flag.
    pub fn numeric(field: Field, value: f64) -> Option<Edit> {
        match field {
            Field::FlourAmount => Some(Edit::FlourAmount(value)),
            Field::FlourProtein => Some(Edit::FlourProtein(value)),
            Field::StarterAmount => Some(Edit::StarterAmount(value)),
            Field::RoomTemp => Some(Edit::RoomTemp(value)),
            Field::Hydration => Some(Edit::Hydration(value)),
            Field::FridgeProof => None,
        }
    }
}
