use std::{cmp::Ordering, str::FromStr};

use serde::Serialize;

use crate::models::property::Property;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    Newest,
    PriceLow,
    PriceHigh,
    Rating,
    Guests,
}

#[derive(Debug, Clone, Serialize)]
pub struct SortOptionDescriptor {
    pub value: &'static str,
    pub label: &'static str,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Newest,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
        SortOption::Guests,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
            SortOption::Guests => "guests",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Guests => "Most Guests",
        }
    }

    pub fn descriptor(&self) -> SortOptionDescriptor {
        SortOptionDescriptor {
            value: self.value(),
            label: self.label(),
        }
    }

    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            SortOption::Newest => b.created_at.cmp(&a.created_at),
            SortOption::PriceLow => a.price.amount.total_cmp(&b.price.amount),
            SortOption::PriceHigh => b.price.amount.total_cmp(&a.price.amount),
            SortOption::Rating => b.rating_average().total_cmp(&a.rating_average()),
            SortOption::Guests => b.specifications.guests.cmp(&a.specifications.guests),
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.value() == value)
            .ok_or_else(|| format!("unknown sort option: {}", value))
    }
}

/// Sorted copy of `properties`. Unknown keys keep the input order.
pub fn sort_properties(properties: &[Property], sort_by: &str) -> Vec<Property> {
    let mut sorted = properties.to_vec();
    if let Ok(option) = sort_by.parse::<SortOption>() {
        // stable, so ties keep catalog order
        sorted.sort_by(|a, b| option.compare(a, b));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_option_round_trips_through_its_value() {
        for option in SortOption::ALL {
            assert_eq!(option.value().parse::<SortOption>(), Ok(option));
        }
        assert!("cheapest".parse::<SortOption>().is_err());
    }
}
