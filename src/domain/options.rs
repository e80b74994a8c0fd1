// src/domain/options.rs

//! Fixed choice sets offered by the insights form.

use std::fmt;

/// Declares a closed set of choices, each carrying the label shown in the UI.
/// The label is also what the filter matches against.
macro_rules! labelled_choices {
    ($name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_label(label: &str) -> Option<Self> {
                let label = label.trim();
                Self::ALL.iter().copied().find(|c| c.label() == label)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_choices!(RestaurantType {
    FastFood => "Fast Food",
    CasualDining => "Casual Dining",
    FineDining => "Fine Dining",
    Cafe => "Cafe",
    CoffeeShop => "Coffee Shop",
    DessertShops => "Dessert Shops",
    Buffet => "Buffet",
    FoodTruck => "Food Truck",
    Other => "Other",
});

labelled_choices!(CuisineType {
    Italian => "Italian",
    Mexican => "Mexican",
    Chinese => "Chinese",
    Indian => "Indian",
    Japanese => "Japanese",
    Korean => "Korean",
    American => "American",
    Mediterranean => "Mediterranean",
    Vegan => "Vegan",
    Fusion => "Fusion",
    Other => "Other",
});

labelled_choices!(StartupCostBracket {
    Under10k => "<$10,000",
    From10kTo50k => "$10,000-$50,000",
    From50kTo100k => "$50,000-$100,000",
    Over100k => "$100,000+",
});

/// Desired floor space, already validated against a [`SquareFootageRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareFootage(f64);

impl SquareFootage {
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Inclusive bounds for the square-footage input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareFootageRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SquareFootageRange {
    fn default() -> Self {
        Self {
            min: 100.0,
            max: 10_000.0,
            step: 100.0,
        }
    }
}

impl SquareFootageRange {
    pub fn validate(&self, value: f64) -> Result<SquareFootage, String> {
        if !value.is_finite() || value <= 0.0 {
            return Err(format!("square footage must be a positive number, got {value}"));
        }
        if value < self.min || value > self.max {
            return Err(format!(
                "square footage must be between {} and {}, got {value}",
                self.min, self.max
            ));
        }
        Ok(SquareFootage(value))
    }

    pub fn parse(&self, raw: &str) -> Result<SquareFootage, String> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("square footage is not a number: {raw:?}"))?;
        self.validate(value)
    }
}
