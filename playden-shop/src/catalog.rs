//! Catalog wire model: games, time packages, payment methods.
//!
//! Everything here is immutable from the checkout's perspective; the shapes
//! mirror the shop API responses field for field.

use serde::{Deserialize, Serialize};

/// A purchasable block of play time tied to a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: u32,
    pub name: String,
    pub duration_minutes: u32,
    pub price: u32,
    /// Pre-discount price, shown struck through when greater than `price`.
    #[serde(default)]
    pub original_price: Option<u32>,
    #[serde(default)]
    pub points_earned: u32,
    #[serde(default = "default_bonus_multiplier")]
    pub bonus_multiplier: f32,
    #[serde(default)]
    pub is_promotional: bool,
    #[serde(default)]
    pub promotional_label: Option<String>,
    /// Computed by the backend; false once the per-user purchase cap is hit.
    #[serde(default = "default_can_purchase")]
    pub can_purchase: bool,
}

fn default_bonus_multiplier() -> f32 {
    1.0
}

fn default_can_purchase() -> bool {
    true
}

impl Package {
    /// Points credited for this package with the bonus multiplier applied.
    #[must_use]
    pub fn effective_points(&self) -> u32 {
        let boosted = f64::from(self.points_earned) * f64::from(self.bonus_multiplier);
        boosted.floor() as u32
    }

    /// The price this package is discounted from, when a real discount exists.
    #[must_use]
    pub fn discounted_from(&self) -> Option<u32> {
        self.original_price.filter(|original| *original > self.price)
    }
}

/// A game in the lounge catalog, with its ordered packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub min_players: u32,
    #[serde(default)]
    pub max_players: u32,
    #[serde(default)]
    pub age_rating: String,
    #[serde(default)]
    pub points_per_hour: u32,
    #[serde(default)]
    pub is_reservable: bool,
    /// Additive charge for a scheduled slot; only meaningful when reservable.
    #[serde(default)]
    pub reservation_fee: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl Game {
    #[must_use]
    pub fn package(&self, id: u32) -> Option<&Package> {
        self.packages.iter().find(|pkg| pkg.id == id)
    }
}

/// A way to pay, selected during checkout but never mutated by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub requires_online_payment: bool,
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Envelope around `GET /shop/games.php?id={id}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameEnvelope {
    pub game: Game,
}

impl GameEnvelope {
    /// Parse a game response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not a valid game envelope.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Envelope around `GET /shop/payment_methods.php`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentMethodsEnvelope {
    pub payment_methods: Vec<PaymentMethod>,
}

impl PaymentMethodsEnvelope {
    /// Parse a payment-methods response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not a valid payment-methods envelope.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_envelope_parses_full_shape() {
        let json = r#"{
            "game": {
                "id": 7,
                "name": "Astro Rally",
                "category": "racing",
                "platform": "PS5",
                "min_players": 1,
                "max_players": 4,
                "age_rating": "E10+",
                "points_per_hour": 120,
                "is_reservable": true,
                "reservation_fee": 500,
                "description": "Arcade racing.",
                "image_url": "/img/astro.png",
                "packages": [
                    {
                        "id": 71,
                        "name": "One hour",
                        "duration_minutes": 60,
                        "price": 5000,
                        "original_price": 6000,
                        "points_earned": 120,
                        "bonus_multiplier": 1.5,
                        "is_promotional": true,
                        "promotional_label": "Launch week",
                        "can_purchase": true
                    }
                ]
            }
        }"#;

        let envelope = GameEnvelope::from_json(json).expect("game envelope");
        let game = envelope.game;
        assert!(game.is_reservable);
        assert_eq!(game.reservation_fee, 500);
        let pkg = game.package(71).expect("package 71");
        assert_eq!(pkg.effective_points(), 180);
        assert_eq!(pkg.discounted_from(), Some(6000));
        assert!(game.package(99).is_none());
    }

    #[test]
    fn package_defaults_apply_for_sparse_payloads() {
        let json = r#"{
            "id": 1,
            "name": "Quick play",
            "duration_minutes": 30,
            "price": 2500
        }"#;

        let pkg: Package = serde_json::from_str(json).expect("package");
        assert!(pkg.can_purchase);
        assert!(!pkg.is_promotional);
        assert!((pkg.bonus_multiplier - 1.0).abs() < f32::EPSILON);
        assert_eq!(pkg.effective_points(), 0);
        assert_eq!(pkg.discounted_from(), None);
    }

    #[test]
    fn discount_requires_original_above_price() {
        let mut pkg = Package {
            id: 1,
            name: String::from("Hour"),
            duration_minutes: 60,
            price: 5000,
            original_price: Some(5000),
            points_earned: 0,
            bonus_multiplier: 1.0,
            is_promotional: false,
            promotional_label: None,
            can_purchase: true,
        };
        assert_eq!(pkg.discounted_from(), None);
        pkg.original_price = Some(5500);
        assert_eq!(pkg.discounted_from(), Some(5500));
    }

    #[test]
    fn payment_methods_envelope_parses() {
        let json = r#"{
            "payment_methods": [
                { "id": 1, "name": "Pay at the counter" },
                { "id": 2, "name": "Mobile money", "requires_online_payment": true,
                  "instructions": "Keep your phone nearby to confirm." }
            ]
        }"#;

        let envelope = PaymentMethodsEnvelope::from_json(json).expect("methods envelope");
        assert_eq!(envelope.payment_methods.len(), 2);
        assert!(!envelope.payment_methods[0].requires_online_payment);
        assert!(envelope.payment_methods[1].requires_online_payment);
    }
}
