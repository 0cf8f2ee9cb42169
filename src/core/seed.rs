//! Sample catalog for development databases.
//!
//! Seeding is idempotent: destinations are matched by name, deals and
//! experiences by title, and existing records are left untouched.
use serde::{Deserialize, Serialize};
use tracing::info;
use tripcompare_primitives::deal_type::DealType;

use super::deal::NewDeal;
use super::destination::NewDestination;
use super::error::Error;
use super::experience::NewExperience;
use super::Backend;

/// Number of records inserted by a seeding run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub destinations: usize,
    pub deals: usize,
    pub experiences: usize,
}

#[allow(clippy::too_many_arguments)]
fn destination(
    name: &str,
    country: &str,
    city_code: &str,
    description: &str,
    image_url: &str,
    prices: (f64, f64),
    best_time_to_visit: &str,
    tags: &[&str],
) -> NewDestination {
    NewDestination {
        name: name.to_owned(),
        country: country.to_owned(),
        city_code: Some(city_code.to_owned()),
        description: Some(description.to_owned()),
        image_url: Some(image_url.to_owned()),
        is_featured: true,
        avg_flight_price: Some(prices.0),
        avg_hotel_price: Some(prices.1),
        best_time_to_visit: Some(best_time_to_visit.to_owned()),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        ..Default::default()
    }
}

#[must_use]
pub fn sample_destinations() -> Vec<NewDestination> {
    vec![
        destination(
            "Barcelona",
            "Spain",
            "BCN",
            "Vibrant city known for Gaudí architecture and beaches",
            "https://images.unsplash.com/photo-1523531294919-4bcd7c65e216?w=600",
            (79.0, 95.0),
            "April to June",
            &["beach", "city", "culture", "nightlife"],
        ),
        destination(
            "Rome",
            "Italy",
            "FCO",
            "Eternal city with ancient ruins and world-class cuisine",
            "https://images.unsplash.com/photo-1552832230-c0197dd311b5?w=600",
            (89.0, 110.0),
            "April to May, September to October",
            &["history", "culture", "food", "art"],
        ),
        destination(
            "Amsterdam",
            "Netherlands",
            "AMS",
            "Charming canals, world-class museums, and vibrant nightlife",
            "https://images.unsplash.com/photo-1534351590666-13e3e96b5017?w=600",
            (65.0, 120.0),
            "April to May",
            &["city", "culture", "nightlife", "art"],
        ),
        destination(
            "Paris",
            "France",
            "CDG",
            "The City of Light - romance, art, and gastronomy",
            "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?w=600",
            (75.0, 140.0),
            "April to June, September to November",
            &["romance", "culture", "food", "art", "shopping"],
        ),
    ]
}

/// Sample deals paired with the name of their destination.
#[must_use]
pub fn sample_deals() -> Vec<(&'static str, NewDeal)> {
    let deal = |title: &str,
                description: &str,
                deal_type: DealType,
                origin_city: Option<&str>,
                prices: (f64, f64),
                provider: &str,
                link: &str,
                image_url: &str,
                travel_dates: Option<&str>| NewDeal {
        title: title.to_owned(),
        description: Some(description.to_owned()),
        deal_type,
        destination_id: None,
        origin_city: origin_city.map(ToOwned::to_owned),
        original_price: prices.0,
        deal_price: prices.1,
        currency: Some("EUR".to_owned()),
        affiliate_link: Some(link.to_owned()),
        affiliate_provider: Some(provider.to_owned()),
        image_url: Some(image_url.to_owned()),
        valid_from: None,
        valid_until: None,
        travel_dates: travel_dates.map(ToOwned::to_owned),
        is_featured: true,
    };

    vec![
        (
            "Barcelona",
            deal(
                "Barcelona Beach Escape",
                "Round-trip flights from London",
                DealType::Flight,
                Some("London"),
                (145.0, 79.0),
                "aviasales",
                "https://www.aviasales.com/search/LON1504BCN22041?marker=tripcompare",
                "https://images.unsplash.com/photo-1523531294919-4bcd7c65e216?w=600",
                Some("Apr 15-22"),
            ),
        ),
        (
            "Rome",
            deal(
                "Rome City Break",
                "3 nights + flights from Paris",
                DealType::Package,
                Some("Paris"),
                (320.0, 199.0),
                "aviasales",
                "https://www.aviasales.com/search/PAR0105ROM04051?marker=tripcompare",
                "https://images.unsplash.com/photo-1552832230-c0197dd311b5?w=600",
                Some("May 1-4"),
            ),
        ),
        (
            "Amsterdam",
            deal(
                "Amsterdam 4-Star Hotel",
                "Central location with free cancellation",
                DealType::Hotel,
                None,
                (185.0, 89.0),
                "hotellook",
                "https://search.hotellook.com?destination=Amsterdam&checkIn=2026-05-15&checkOut=2026-05-18&adults=2&marker=tripcompare",
                "https://images.unsplash.com/photo-1534351590666-13e3e96b5017?w=600",
                None,
            ),
        ),
        (
            "Paris",
            deal(
                "Paris Weekend Getaway",
                "Weekend escape from Berlin",
                DealType::Flight,
                Some("Berlin"),
                (215.0, 129.0),
                "aviasales",
                "https://www.aviasales.com/search/BER0706PAR09061?marker=tripcompare",
                "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?w=600",
                Some("Jun 7-9"),
            ),
        ),
    ]
}

/// Sample experiences paired with the name of their destination.
#[must_use]
pub fn sample_experiences() -> Vec<(&'static str, NewExperience)> {
    let experience = |title: &str, description: &str, price: f64, duration: &str, rating: f64, review_count: i64, image_url: &str| {
        NewExperience {
            title: title.to_owned(),
            description: Some(description.to_owned()),
            destination_id: None,
            price,
            currency: Some("EUR".to_owned()),
            duration: Some(duration.to_owned()),
            rating: Some(rating),
            review_count: Some(review_count),
            image_url: Some(image_url.to_owned()),
            affiliate_link: None,
            category: Some("tours".to_owned()),
        }
    };

    vec![
        (
            "Rome",
            experience(
                "Colosseum Skip-the-Line Tour",
                "Skip the long lines and explore Rome's iconic amphitheater",
                45.0,
                "3 hours",
                4.9,
                2847,
                "https://images.unsplash.com/photo-1549144511-f099e773c147?w=500",
            ),
        ),
        (
            "Paris",
            experience(
                "Eiffel Tower Summit Access",
                "Skip-the-line access to the summit with stunning views",
                62.0,
                "2 hours",
                4.8,
                5123,
                "https://images.unsplash.com/photo-1499856871958-5b9627545d1a?w=500",
            ),
        ),
        (
            "Barcelona",
            experience(
                "Sagrada Familia Guided Tour",
                "Discover Gaudí's masterpiece with an expert guide",
                39.0,
                "1.5 hours",
                4.9,
                3567,
                "https://images.unsplash.com/photo-1583422409516-2895a77efded?w=500",
            ),
        ),
        (
            "Amsterdam",
            experience(
                "Amsterdam Canal Cruise",
                "See the city from the water on a scenic canal cruise",
                18.0,
                "1 hour",
                4.7,
                1892,
                "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=500",
            ),
        ),
    ]
}

impl Backend {
    /// Loads the sample catalog.
    ///
    /// # Errors
    ///
    /// Will return `Err` outside debug mode or if the database fails.
    pub fn seed(&self) -> Result<SeedReport, Error> {
        if !self.config().app.debug {
            return Err(Error::SeedingDisabled);
        }

        let mut report = SeedReport::default();

        for destination in sample_destinations() {
            if self.database.get_destination_by_name(&destination.name)?.is_none() {
                self.create_destination(&destination)?;
                report.destinations += 1;
            }
        }

        for (destination_name, mut deal) in sample_deals() {
            if self.database.get_deal_by_title(&deal.title)?.is_none() {
                deal.destination_id = self.destination_id(destination_name)?;
                self.create_deal(&deal)?;
                report.deals += 1;
            }
        }

        for (destination_name, mut experience) in sample_experiences() {
            if self.database.get_experience_by_title(&experience.title)?.is_none() {
                experience.destination_id = self.destination_id(destination_name)?;
                self.create_experience(&experience)?;
                report.experiences += 1;
            }
        }

        info!(
            destinations = report.destinations,
            deals = report.deals,
            experiences = report.experiences,
            "database seeded"
        );

        Ok(report)
    }

    fn destination_id(&self, name: &str) -> Result<Option<i64>, Error> {
        Ok(self.database.get_destination_by_name(name)?.map(|destination| destination.id))
    }
}
