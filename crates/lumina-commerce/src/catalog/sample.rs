//! Bundled sample catalog for demos and tests.

use crate::catalog::{BookFormat, Catalog, Item, ItemMetadata};
use crate::money::{Currency, Money};

fn english(format: BookFormat, pages: u32, publisher: &str, isbn: &str) -> ItemMetadata {
    ItemMetadata {
        format,
        language: "English".to_string(),
        pages,
        publisher: publisher.to_string(),
        isbn: Some(isbn.to_string()),
    }
}

/// The six sample books, priced in USD.
pub fn sample_items() -> Vec<Item> {
    sample_items_in(Currency::USD)
}

/// The six sample books with the same figures in `currency`.
pub fn sample_items_in(currency: Currency) -> Vec<Item> {
    let price = |amount: f64| Money::from_decimal(amount, currency);

    let mut midnight = Item::new("1", "The Midnight Library", "Matt Haig", "Fiction", price(18.99))
        .with_discount(price(14.99))
        .with_rating(4.8, 1250)
        .with_stock(25)
        .with_metadata(english(BookFormat::Hardcover, 304, "Viking", "978-0525559474"));
    midnight.description = "Between life and death there is a library, and within that library, \
        the shelves go on forever."
        .to_string();
    midnight.featured = true;
    midnight.bestseller = true;

    let mut habits = Item::new("2", "Atomic Habits", "James Clear", "Non-Fiction", price(27.00))
        .with_discount(price(21.60))
        .with_rating(4.9, 84_000)
        .with_stock(100)
        .with_metadata(english(BookFormat::Paperback, 320, "Avery", "978-0735211292"));
    habits.description =
        "A proven framework for improving every day.".to_string();
    habits.bestseller = true;

    let mut alchemist = Item::new("3", "The Alchemist", "Paulo Coelho", "Fiction", price(15.99))
        .with_rating(4.7, 45_000)
        .with_stock(50)
        .with_metadata(english(BookFormat::Paperback, 208, "HarperOne", "978-0062315007"));
    alchemist.description = "A fable about following your dream.".to_string();
    alchemist.featured = true;

    let mut deep_work = Item::new("4", "Deep Work", "Cal Newport", "Business", price(24.99))
        .with_discount(price(19.99))
        .with_rating(4.6, 12_000)
        .with_stock(12)
        .with_metadata(english(
            BookFormat::Hardcover,
            304,
            "Grand Central Publishing",
            "978-1455586691",
        ));
    deep_work.description = "Rules for focused success in a distracted world.".to_string();
    deep_work.new_arrival = true;

    let mut caterpillar = Item::new(
        "5",
        "The Very Hungry Caterpillar",
        "Eric Carle",
        "Children",
        price(10.99),
    )
    .with_rating(4.9, 150_000)
    .with_stock(80)
    .with_metadata(english(BookFormat::Hardcover, 26, "Philomel Books", "978-0399226908"));
    caterpillar.description = "The all-time classic story of a hungry caterpillar.".to_string();
    caterpillar.bestseller = true;

    let mut sapiens = Item::new(
        "6",
        "Sapiens: A Brief History of Humankind",
        "Yuval Noah Harari",
        "Science",
        price(22.50),
    )
    .with_rating(4.8, 65_000)
    .with_stock(35)
    .with_metadata(english(BookFormat::Paperback, 464, "Harper", "978-0062316097"));
    sapiens.description =
        "A fascinating narrative of humanity's creation and evolution.".to_string();
    sapiens.featured = true;

    vec![midnight, habits, alchemist, deep_work, caterpillar, sapiens]
}

/// The sample items wrapped in a catalog.
pub fn sample_catalog() -> Catalog {
    sample_catalog_in(Currency::USD)
}

/// The sample catalog priced in `currency`.
pub fn sample_catalog_in(currency: Currency) -> Catalog {
    Catalog::new(sample_items_in(currency)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_items_are_valid() {
        for item in sample_items() {
            assert!(item.validate().is_ok(), "{} failed validation", item.id);
        }
        assert_eq!(sample_catalog().len(), 6);
    }

    #[test]
    fn test_sample_catalog_in_currency() {
        let catalog = sample_catalog_in(Currency::GBP);
        assert!(catalog.ensure_currency(Currency::GBP).is_ok());
        assert_eq!(catalog.items()[0].effective_price(), Money::new(1499, Currency::GBP));
    }
}
