//! Built-in catalog dataset.
//!
//! Used when no external product source is configured and as the
//! fallback when the source is unreachable, so the storefront stays
//! usable offline.

use once_cell::sync::Lazy;

use crate::domain::foundation::{FlavorId, Money, PackOptionId};

use super::{Flavor, FlavorCategory, PackOption};

/// Price of one cookie bought outside a pack; reference point for
/// pack savings calculations.
pub const SINGLE_COOKIE_PRICE: Money = Money::from_cents(499);

static FLAVORS: Lazy<Vec<Flavor>> = Lazy::new(|| {
    let defs: Vec<(u32, &str, FlavorCategory, &str, &str, Option<Money>)> = vec![
        (
            1,
            "Grandma's Chocolate Chip",
            FlavorCategory::Chocolate,
            "Our signature cookie made with real butter, brown sugar, and chunks of Belgian chocolate.",
            "650 cal",
            None,
        ),
        (
            2,
            "Vanilla Sugar Cookie",
            FlavorCategory::Classic,
            "Buttery soft sugar cookies with real vanilla extract and a delicate dusting of powdered sugar.",
            "600 cal",
            None,
        ),
        (
            3,
            "Oatmeal Raisin",
            FlavorCategory::Classic,
            "Old-fashioned oatmeal cookies with plump California raisins, cinnamon, and a touch of nutmeg.",
            "580 cal",
            None,
        ),
        (
            4,
            "Double Chocolate Fudge",
            FlavorCategory::Chocolate,
            "For chocolate lovers - rich cocoa cookies with semi-sweet chips and a fudgy center.",
            "720 cal",
            None,
        ),
        (
            5,
            "Strawberry Shortcake",
            FlavorCategory::Fruity,
            "Light and airy cookies with freeze-dried strawberries and a hint of cream.",
            "680 cal",
            None,
        ),
        (
            6,
            "Lemon Zest",
            FlavorCategory::Fruity,
            "Bright and refreshing with fresh lemon zest and a light lemon glaze.",
            "620 cal",
            None,
        ),
        (
            7,
            "Pumpkin Spice",
            FlavorCategory::Seasonal,
            "Fall favorite made with real pumpkin puree, warm spices, and a dusting of cinnamon sugar.",
            "640 cal",
            None,
        ),
        (
            8,
            "Peanut Butter Classic",
            FlavorCategory::Classic,
            "Creamy natural peanut butter cookies with a crisscross pattern.",
            "590 cal",
            None,
        ),
        (
            9,
            "Red Velvet Indulgence",
            FlavorCategory::Chocolate,
            "Luxurious red velvet cookies with cream cheese frosting and chocolate chips.",
            "750 cal",
            Some(Money::from_cents(99)),
        ),
        (
            10,
            "Snickerdoodle Classic",
            FlavorCategory::Classic,
            "Traditional snickerdoodles with cinnamon sugar coating and soft, chewy center.",
            "610 cal",
            None,
        ),
        (
            11,
            "Blueberry Muffin Top",
            FlavorCategory::Fruity,
            "Cookie version of your favorite blueberry muffin with fresh berry pieces.",
            "670 cal",
            None,
        ),
        (
            12,
            "Gingerbread Wonder",
            FlavorCategory::Seasonal,
            "Holiday favorite with warm ginger, molasses, and festive spices.",
            "630 cal",
            None,
        ),
    ];

    defs.into_iter()
        .map(|(id, name, category, description, calories, surcharge)| {
            let flavor = Flavor::new(FlavorId::new(id), name, category, description, calories)
                .expect("built-in flavor data is valid");
            match surcharge {
                Some(amount) => flavor.with_surcharge(amount),
                None => flavor,
            }
        })
        .collect()
});

static PACK_OPTIONS: Lazy<Vec<PackOption>> = Lazy::new(|| {
    let defs: Vec<(&str, &str, i64, u32)> = vec![
        ("single", "Single", 499, 1),
        ("4pack", "4-Pack", 1899, 4),
        ("6pack", "6-Pack", 2499, 6),
        ("12pack", "12-Pack", 4899, 12),
    ];

    defs.into_iter()
        .map(|(id, name, price_cents, capacity)| {
            PackOption::new(
                PackOptionId::new(id).expect("built-in pack id is valid"),
                name,
                Money::from_cents(price_cents),
                capacity,
            )
            .expect("built-in pack data is valid")
        })
        .collect()
});

/// The built-in flavor list.
pub fn default_flavors() -> Vec<Flavor> {
    FLAVORS.clone()
}

/// The built-in pack options.
pub fn default_pack_options() -> Vec<PackOption> {
    PACK_OPTIONS.clone()
}
