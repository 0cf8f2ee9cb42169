//! The `MySQL` database driver.
use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use r2d2::Pool;
use r2d2_mysql::mysql::prelude::{FromValue, Queryable};
use r2d2_mysql::mysql::{Opts, OptsBuilder, Row, Value};
use r2d2_mysql::MySqlConnectionManager;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tripcompare_primitives::pagination::Pagination;
use tripcompare_primitives::DatabaseDriver;

use super::{contains_pattern, from_timestamp, Database, Error};
use crate::core::deal::{Deal, DealFilter, NewDeal};
use crate::core::destination::{Destination, NewDestination};
use crate::core::experience::{self, Experience, ExperienceFilter, NewExperience};
use crate::core::price_alert::{NewPriceAlert, PriceAlert};
use crate::core::subscriber::{NewSubscriber, Subscriber};
use crate::core::tracking::{DestinationSearches, NewClick, NewSearchLog};

const DRIVER: DatabaseDriver = DatabaseDriver::MySQL;

const SUBSCRIBER_COLUMNS: &str = "id, email, name, is_active, source, preferences, created_at, updated_at";

const DESTINATION_COLUMNS: &str = "id, name, country, city_code, description, image_url, latitude, longitude, is_featured, \
     avg_flight_price, avg_hotel_price, best_time_to_visit, tags, created_at, updated_at";

const DEAL_COLUMNS: &str = "id, title, description, deal_type, destination_id, origin_city, original_price, deal_price, \
     discount_percentage, currency, affiliate_link, affiliate_provider, image_url, valid_from, valid_until, travel_dates, \
     is_active, is_featured, click_count, booking_count, created_at, updated_at";

const EXPERIENCE_COLUMNS: &str = "id, title, description, destination_id, price, currency, duration, rating, review_count, \
     image_url, affiliate_link, affiliate_provider, category, is_active, created_at";

const PRICE_ALERT_COLUMNS: &str =
    "id, email, alert_type, origin, destination, target_price, current_lowest_price, is_active, last_notified, created_at";

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

#[track_caller]
fn column<T: FromValue>(row: &Row, index: usize) -> Result<T, Error> {
    match row.get_opt::<T, usize>(index) {
        Some(value) => Ok(value?),
        None => Err(Error::MissingColumn {
            location: Location::caller(),
            column: index,
            driver: DRIVER,
        }),
    }
}

fn json_column<T: DeserializeOwned>(row: &Row, index: usize) -> Result<T, Error> {
    let text: String = column(row, index)?;
    serde_json::from_str(&text).map_err(|e| Error::invalid_data(e, DRIVER))
}

fn parsed_column<T>(row: &Row, index: usize) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text: String = column(row, index)?;
    text.parse().map_err(|e| Error::invalid_data(e, DRIVER))
}

fn time_column(row: &Row, index: usize) -> Result<DateTime<Utc>, Error> {
    Ok(from_timestamp(column(row, index)?))
}

fn optional_time_column(row: &Row, index: usize) -> Result<Option<DateTime<Utc>>, Error> {
    Ok(column::<Option<i64>>(row, index)?.map(from_timestamp))
}

fn optional_timestamp(time: Option<DateTime<Utc>>) -> Value {
    Value::from(time.map(|at| at.timestamp()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|e| Error::invalid_data(e, DRIVER))
}

fn subscriber_row(row: &Row) -> Result<Subscriber, Error> {
    Ok(Subscriber {
        id: column(row, 0)?,
        email: column(row, 1)?,
        name: column(row, 2)?,
        is_active: column(row, 3)?,
        source: column(row, 4)?,
        preferences: json_column(row, 5)?,
        created_at: time_column(row, 6)?,
        updated_at: optional_time_column(row, 7)?,
    })
}

fn destination_row(row: &Row) -> Result<Destination, Error> {
    Ok(Destination {
        id: column(row, 0)?,
        name: column(row, 1)?,
        country: column(row, 2)?,
        city_code: column(row, 3)?,
        description: column(row, 4)?,
        image_url: column(row, 5)?,
        latitude: column(row, 6)?,
        longitude: column(row, 7)?,
        is_featured: column(row, 8)?,
        avg_flight_price: column(row, 9)?,
        avg_hotel_price: column(row, 10)?,
        best_time_to_visit: column(row, 11)?,
        tags: json_column(row, 12)?,
        created_at: time_column(row, 13)?,
        updated_at: optional_time_column(row, 14)?,
    })
}

fn deal_row(row: &Row) -> Result<Deal, Error> {
    Ok(Deal {
        id: column(row, 0)?,
        title: column(row, 1)?,
        description: column(row, 2)?,
        deal_type: parsed_column(row, 3)?,
        destination_id: column(row, 4)?,
        origin_city: column(row, 5)?,
        original_price: column(row, 6)?,
        deal_price: column(row, 7)?,
        discount_percentage: column(row, 8)?,
        currency: column(row, 9)?,
        affiliate_link: column(row, 10)?,
        affiliate_provider: column(row, 11)?,
        image_url: column(row, 12)?,
        valid_from: optional_time_column(row, 13)?,
        valid_until: optional_time_column(row, 14)?,
        travel_dates: column(row, 15)?,
        is_active: column(row, 16)?,
        is_featured: column(row, 17)?,
        click_count: column(row, 18)?,
        booking_count: column(row, 19)?,
        created_at: time_column(row, 20)?,
        updated_at: optional_time_column(row, 21)?,
    })
}

fn experience_row(row: &Row) -> Result<Experience, Error> {
    Ok(Experience {
        id: column(row, 0)?,
        title: column(row, 1)?,
        description: column(row, 2)?,
        destination_id: column(row, 3)?,
        price: column(row, 4)?,
        currency: column(row, 5)?,
        duration: column(row, 6)?,
        rating: column(row, 7)?,
        review_count: column(row, 8)?,
        image_url: column(row, 9)?,
        affiliate_link: column(row, 10)?,
        affiliate_provider: column(row, 11)?,
        category: column(row, 12)?,
        is_active: column(row, 13)?,
        created_at: time_column(row, 14)?,
    })
}

fn price_alert_row(row: &Row) -> Result<PriceAlert, Error> {
    Ok(PriceAlert {
        id: column(row, 0)?,
        email: column(row, 1)?,
        alert_type: parsed_column(row, 2)?,
        origin: column(row, 3)?,
        destination: column(row, 4)?,
        target_price: column(row, 5)?,
        current_lowest_price: column(row, 6)?,
        is_active: column(row, 7)?,
        last_notified: optional_time_column(row, 8)?,
        created_at: time_column(row, 9)?,
    })
}

impl Mysql {
    fn get_one<T>(&self, sql: &str, params: Vec<Value>, f: fn(&Row) -> Result<T, Error>) -> Result<Option<T>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_first::<Row, _, _>(sql, params)?.as_ref().map(f).transpose()
    }

    fn get_many<T>(&self, sql: &str, params: Vec<Value>, f: fn(&Row) -> Result<T, Error>) -> Result<Vec<T>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec::<Row, _, _>(sql, params)?.iter().map(f).collect()
    }

    fn get_count(&self, sql: &str, params: Vec<Value>) -> Result<u64, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let count = conn.exec_first::<i64, _, _>(sql, params)?;

        Ok(count.unwrap_or_default().unsigned_abs())
    }

    /// Runs an `INSERT` and returns the id of the new row.
    fn insert(&self, sql: &str, params: Vec<Value>) -> Result<i64, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(sql, params)?;

        i64::try_from(conn.last_insert_id()).map_err(|e| Error::invalid_data(e, DRIVER))
    }

    fn execute(&self, sql: &str, params: Vec<Value>) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.exec_drop(sql, params)?;

        Ok(())
    }
}

impl Database for Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `MySQL` database.
    fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path)?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_subscribers_table = "
        CREATE TABLE IF NOT EXISTS subscribers (
            id BIGINT PRIMARY KEY AUTO_INCREMENT,
            email VARCHAR(255) NOT NULL UNIQUE,
            name VARCHAR(255),
            is_active TINYINT(1) NOT NULL DEFAULT 1,
            source VARCHAR(100) NOT NULL DEFAULT 'website',
            preferences TEXT NOT NULL,
            created_at BIGINT NOT NULL,
            updated_at BIGINT
        );";

        let create_destinations_table = "
        CREATE TABLE IF NOT EXISTS destinations (
            id BIGINT PRIMARY KEY AUTO_INCREMENT,
            name VARCHAR(255) NOT NULL,
            country VARCHAR(100) NOT NULL,
            city_code VARCHAR(10),
            description TEXT,
            image_url VARCHAR(500),
            latitude DOUBLE,
            longitude DOUBLE,
            is_featured TINYINT(1) NOT NULL DEFAULT 0,
            avg_flight_price DOUBLE,
            avg_hotel_price DOUBLE,
            best_time_to_visit VARCHAR(100),
            tags TEXT NOT NULL,
            created_at BIGINT NOT NULL,
            updated_at BIGINT,
            INDEX (name)
        );";

        let create_deals_table = "
        CREATE TABLE IF NOT EXISTS deals (
            id BIGINT PRIMARY KEY AUTO_INCREMENT,
            title VARCHAR(255) NOT NULL,
            description TEXT,
            deal_type VARCHAR(50) NOT NULL,
            destination_id BIGINT,
            origin_city VARCHAR(100),
            original_price DOUBLE NOT NULL,
            deal_price DOUBLE NOT NULL,
            discount_percentage BIGINT NOT NULL DEFAULT 0,
            currency VARCHAR(3) NOT NULL DEFAULT 'EUR',
            affiliate_link TEXT,
            affiliate_provider VARCHAR(100),
            image_url VARCHAR(500),
            valid_from BIGINT,
            valid_until BIGINT,
            travel_dates VARCHAR(255),
            is_active TINYINT(1) NOT NULL DEFAULT 1,
            is_featured TINYINT(1) NOT NULL DEFAULT 0,
            click_count BIGINT NOT NULL DEFAULT 0,
            booking_count BIGINT NOT NULL DEFAULT 0,
            created_at BIGINT NOT NULL,
            updated_at BIGINT,
            FOREIGN KEY (destination_id) REFERENCES destinations(id)
        );";

        let create_experiences_table = "
        CREATE TABLE IF NOT EXISTS experiences (
            id BIGINT PRIMARY KEY AUTO_INCREMENT,
            title VARCHAR(255) NOT NULL,
            description TEXT,
            destination_id BIGINT,
            price DOUBLE NOT NULL,
            currency VARCHAR(3) NOT NULL DEFAULT 'EUR',
            duration VARCHAR(100),
            rating DOUBLE,
            review_count BIGINT NOT NULL DEFAULT 0,
            image_url VARCHAR(500),
            affiliate_link TEXT,
            affiliate_provider VARCHAR(100) NOT NULL DEFAULT 'getyourguide',
            category VARCHAR(100),
            is_active TINYINT(1) NOT NULL DEFAULT 1,
            created_at BIGINT NOT NULL,
            FOREIGN KEY (destination_id) REFERENCES destinations(id)
        );";

        let create_search_logs_table = "
        CREATE TABLE IF NOT EXISTS search_logs (
            id BIGINT PRIMARY KEY AUTO_INCREMENT,
            search_type VARCHAR(50) NOT NULL,
            origin VARCHAR(100),
            destination VARCHAR(255) NOT NULL,
            check_in BIGINT,
            check_out BIGINT,
            travelers BIGINT NOT NULL DEFAULT 1,
            ip_address VARCHAR(45),
            user_agent VARCHAR(500),
            session_id VARCHAR(100),
            created_at BIGINT NOT NULL,
            INDEX (destination)
        );";

        let create_click_tracking_table = "
        CREATE TABLE IF NOT EXISTS click_tracking (
            id BIGINT PRIMARY KEY AUTO_INCREMENT,
            deal_id BIGINT,
            experience_id BIGINT,
            link_type VARCHAR(50) NOT NULL,
            affiliate_provider VARCHAR(100),
            ip_address VARCHAR(45),
            user_agent VARCHAR(500),
            referrer VARCHAR(500),
            session_id VARCHAR(100),
            created_at BIGINT NOT NULL,
            FOREIGN KEY (deal_id) REFERENCES deals(id),
            FOREIGN KEY (experience_id) REFERENCES experiences(id)
        );";

        let create_price_alerts_table = "
        CREATE TABLE IF NOT EXISTS price_alerts (
            id BIGINT PRIMARY KEY AUTO_INCREMENT,
            email VARCHAR(255) NOT NULL,
            alert_type VARCHAR(50) NOT NULL,
            origin VARCHAR(100),
            destination VARCHAR(255) NOT NULL,
            target_price DOUBLE,
            current_lowest_price DOUBLE,
            is_active TINYINT(1) NOT NULL DEFAULT 1,
            last_notified BIGINT,
            created_at BIGINT NOT NULL,
            INDEX (email)
        );";

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(create_subscribers_table)?;
        conn.query_drop(create_destinations_table)?;
        conn.query_drop(create_deals_table)?;
        conn.query_drop(create_experiences_table)?;
        conn.query_drop(create_search_logs_table)?;
        conn.query_drop(create_click_tracking_table)?;
        conn.query_drop(create_price_alerts_table)?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        for table in [
            "click_tracking",
            "search_logs",
            "price_alerts",
            "experiences",
            "deals",
            "destinations",
            "subscribers",
        ] {
            conn.query_drop(format!("DROP TABLE `{table}`;"))?;
        }

        Ok(())
    }

    /// Refer to [`databases::Database::insert_subscriber`](crate::core::databases::Database::insert_subscriber).
    fn insert_subscriber(&self, subscriber: &NewSubscriber, created_at: DateTime<Utc>) -> Result<Subscriber, Error> {
        let id = self.insert(
            "INSERT INTO subscribers (email, name, is_active, source, preferences, created_at) VALUES (?, ?, 1, ?, ?, ?)",
            vec![
                Value::from(&subscriber.email),
                Value::from(&subscriber.name),
                Value::from(subscriber.source()),
                Value::from(to_json(&subscriber.preferences())?),
                Value::from(created_at.timestamp()),
            ],
        )?;

        self.get_one(
            &format!("SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE id = ?"),
            vec![Value::from(id)],
            subscriber_row,
        )?
        .ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::get_subscriber_by_email`](crate::core::databases::Database::get_subscriber_by_email).
    fn get_subscriber_by_email(&self, email: &str) -> Result<Option<Subscriber>, Error> {
        self.get_one(
            &format!("SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE email = ?"),
            vec![Value::from(email)],
            subscriber_row,
        )
    }

    /// Refer to [`databases::Database::load_subscribers`](crate::core::databases::Database::load_subscribers).
    fn load_subscribers(&self, pagination: &Pagination, active_only: bool) -> Result<Vec<Subscriber>, Error> {
        let filter = if active_only { "WHERE is_active = 1" } else { "" };

        self.get_many(
            &format!("SELECT {SUBSCRIBER_COLUMNS} FROM subscribers {filter} ORDER BY id LIMIT ? OFFSET ?"),
            vec![Value::from(pagination.limit), Value::from(pagination.offset)],
            subscriber_row,
        )
    }

    /// Refer to [`databases::Database::save_subscriber`](crate::core::databases::Database::save_subscriber).
    fn save_subscriber(&self, subscriber: &Subscriber) -> Result<(), Error> {
        self.execute(
            "UPDATE subscribers SET name = ?, is_active = ?, preferences = ?, updated_at = ? WHERE id = ?",
            vec![
                Value::from(&subscriber.name),
                Value::from(subscriber.is_active),
                Value::from(to_json(&subscriber.preferences)?),
                optional_timestamp(subscriber.updated_at),
                Value::from(subscriber.id),
            ],
        )
    }

    /// Refer to [`databases::Database::count_subscribers`](crate::core::databases::Database::count_subscribers).
    fn count_subscribers(&self, active_only: bool) -> Result<u64, Error> {
        if active_only {
            self.get_count("SELECT COUNT(*) FROM subscribers WHERE is_active = 1", vec![])
        } else {
            self.get_count("SELECT COUNT(*) FROM subscribers", vec![])
        }
    }

    /// Refer to [`databases::Database::count_subscribers_since`](crate::core::databases::Database::count_subscribers_since).
    fn count_subscribers_since(&self, since: DateTime<Utc>) -> Result<u64, Error> {
        self.get_count(
            "SELECT COUNT(*) FROM subscribers WHERE created_at >= ?",
            vec![Value::from(since.timestamp())],
        )
    }

    /// Refer to [`databases::Database::insert_destination`](crate::core::databases::Database::insert_destination).
    fn insert_destination(&self, destination: &NewDestination, created_at: DateTime<Utc>) -> Result<Destination, Error> {
        let id = self.insert(
            "INSERT INTO destinations (name, country, city_code, description, image_url, latitude, longitude, is_featured, \
             avg_flight_price, avg_hotel_price, best_time_to_visit, tags, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            vec![
                Value::from(&destination.name),
                Value::from(&destination.country),
                Value::from(&destination.city_code),
                Value::from(&destination.description),
                Value::from(&destination.image_url),
                Value::from(destination.latitude),
                Value::from(destination.longitude),
                Value::from(destination.is_featured),
                Value::from(destination.avg_flight_price),
                Value::from(destination.avg_hotel_price),
                Value::from(&destination.best_time_to_visit),
                Value::from(to_json(&destination.tags)?),
                Value::from(created_at.timestamp()),
            ],
        )?;

        self.get_destination(id)?.ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::get_destination`](crate::core::databases::Database::get_destination).
    fn get_destination(&self, id: i64) -> Result<Option<Destination>, Error> {
        self.get_one(
            &format!("SELECT {DESTINATION_COLUMNS} FROM destinations WHERE id = ?"),
            vec![Value::from(id)],
            destination_row,
        )
    }

    /// Refer to [`databases::Database::get_destination_by_name`](crate::core::databases::Database::get_destination_by_name).
    fn get_destination_by_name(&self, name: &str) -> Result<Option<Destination>, Error> {
        self.get_one(
            &format!("SELECT {DESTINATION_COLUMNS} FROM destinations WHERE name = ? ORDER BY id LIMIT 1"),
            vec![Value::from(name)],
            destination_row,
        )
    }

    /// Refer to [`databases::Database::load_destinations`](crate::core::databases::Database::load_destinations).
    fn load_destinations(&self, pagination: &Pagination, featured_only: bool) -> Result<Vec<Destination>, Error> {
        let filter = if featured_only { "WHERE is_featured = 1" } else { "" };

        self.get_many(
            &format!("SELECT {DESTINATION_COLUMNS} FROM destinations {filter} ORDER BY id LIMIT ? OFFSET ?"),
            vec![Value::from(pagination.limit), Value::from(pagination.offset)],
            destination_row,
        )
    }

    /// Refer to [`databases::Database::search_destinations`](crate::core::databases::Database::search_destinations).
    fn search_destinations(&self, query: &str, limit: u32) -> Result<Vec<Destination>, Error> {
        let pattern = contains_pattern(query);

        self.get_many(
            &format!(
                "SELECT {DESTINATION_COLUMNS} FROM destinations \
                 WHERE LOWER(name) LIKE ? OR LOWER(country) LIKE ? OR LOWER(COALESCE(city_code, '')) LIKE ? \
                 ORDER BY id LIMIT ?"
            ),
            vec![
                Value::from(&pattern),
                Value::from(&pattern),
                Value::from(&pattern),
                Value::from(limit),
            ],
            destination_row,
        )
    }

    /// Refer to [`databases::Database::save_destination`](crate::core::databases::Database::save_destination).
    fn save_destination(&self, destination: &Destination) -> Result<(), Error> {
        self.execute(
            "UPDATE destinations SET name = ?, country = ?, city_code = ?, description = ?, image_url = ?, latitude = ?, \
             longitude = ?, is_featured = ?, avg_flight_price = ?, avg_hotel_price = ?, best_time_to_visit = ?, tags = ?, \
             updated_at = ? WHERE id = ?",
            vec![
                Value::from(&destination.name),
                Value::from(&destination.country),
                Value::from(&destination.city_code),
                Value::from(&destination.description),
                Value::from(&destination.image_url),
                Value::from(destination.latitude),
                Value::from(destination.longitude),
                Value::from(destination.is_featured),
                Value::from(destination.avg_flight_price),
                Value::from(destination.avg_hotel_price),
                Value::from(&destination.best_time_to_visit),
                Value::from(to_json(&destination.tags)?),
                optional_timestamp(destination.updated_at),
                Value::from(destination.id),
            ],
        )
    }

    /// Refer to [`databases::Database::insert_deal`](crate::core::databases::Database::insert_deal).
    fn insert_deal(&self, deal: &NewDeal, created_at: DateTime<Utc>) -> Result<Deal, Error> {
        let id = self.insert(
            "INSERT INTO deals (title, description, deal_type, destination_id, origin_city, original_price, deal_price, \
             discount_percentage, currency, affiliate_link, affiliate_provider, image_url, valid_from, valid_until, \
             travel_dates, is_active, is_featured, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?)",
            vec![
                Value::from(&deal.title),
                Value::from(&deal.description),
                Value::from(deal.deal_type.to_string()),
                Value::from(deal.destination_id),
                Value::from(&deal.origin_city),
                Value::from(deal.original_price),
                Value::from(deal.deal_price),
                Value::from(deal.discount_percentage()),
                Value::from(deal.currency()),
                Value::from(&deal.affiliate_link),
                Value::from(&deal.affiliate_provider),
                Value::from(&deal.image_url),
                optional_timestamp(deal.valid_from),
                optional_timestamp(deal.valid_until),
                Value::from(&deal.travel_dates),
                Value::from(deal.is_featured),
                Value::from(created_at.timestamp()),
            ],
        )?;

        self.get_deal(id)?.ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::get_deal`](crate::core::databases::Database::get_deal).
    fn get_deal(&self, id: i64) -> Result<Option<Deal>, Error> {
        self.get_one(
            &format!("SELECT {DEAL_COLUMNS} FROM deals WHERE id = ?"),
            vec![Value::from(id)],
            deal_row,
        )
    }

    /// Refer to [`databases::Database::get_deal_by_title`](crate::core::databases::Database::get_deal_by_title).
    fn get_deal_by_title(&self, title: &str) -> Result<Option<Deal>, Error> {
        self.get_one(
            &format!("SELECT {DEAL_COLUMNS} FROM deals WHERE title = ? ORDER BY id LIMIT 1"),
            vec![Value::from(title)],
            deal_row,
        )
    }

    /// Refer to [`databases::Database::load_deals`](crate::core::databases::Database::load_deals).
    fn load_deals(&self, filter: &DealFilter, pagination: &Pagination) -> Result<Vec<Deal>, Error> {
        let mut sql = format!("SELECT {DEAL_COLUMNS} FROM deals WHERE 1 = 1");
        let mut params = Vec::new();

        if let Some(deal_type) = filter.deal_type {
            sql.push_str(" AND deal_type = ?");
            params.push(Value::from(deal_type.to_string()));
        }
        if filter.featured_only {
            sql.push_str(" AND is_featured = 1");
        }
        if filter.active_only {
            sql.push_str(" AND is_active = 1");
        }

        sql.push_str(" ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?");
        params.push(Value::from(pagination.limit));
        params.push(Value::from(pagination.offset));

        self.get_many(&sql, params, deal_row)
    }

    /// Refer to [`databases::Database::load_deals_by_destination`](crate::core::databases::Database::load_deals_by_destination).
    fn load_deals_by_destination(&self, destination_id: i64, limit: u32) -> Result<Vec<Deal>, Error> {
        self.get_many(
            &format!("SELECT {DEAL_COLUMNS} FROM deals WHERE destination_id = ? AND is_active = 1 ORDER BY id LIMIT ?"),
            vec![Value::from(destination_id), Value::from(limit)],
            deal_row,
        )
    }

    /// Refer to [`databases::Database::save_deal`](crate::core::databases::Database::save_deal).
    fn save_deal(&self, deal: &Deal) -> Result<(), Error> {
        self.execute(
            "UPDATE deals SET title = ?, description = ?, deal_price = ?, discount_percentage = ?, affiliate_link = ?, \
             is_active = ?, is_featured = ?, updated_at = ? WHERE id = ?",
            vec![
                Value::from(&deal.title),
                Value::from(&deal.description),
                Value::from(deal.deal_price),
                Value::from(deal.discount_percentage),
                Value::from(&deal.affiliate_link),
                Value::from(deal.is_active),
                Value::from(deal.is_featured),
                optional_timestamp(deal.updated_at),
                Value::from(deal.id),
            ],
        )
    }

    /// Refer to [`databases::Database::increment_deal_clicks`](crate::core::databases::Database::increment_deal_clicks).
    fn increment_deal_clicks(&self, id: i64) -> Result<(), Error> {
        self.execute(
            "UPDATE deals SET click_count = click_count + 1 WHERE id = ?",
            vec![Value::from(id)],
        )
    }

    /// Refer to [`databases::Database::count_deals`](crate::core::databases::Database::count_deals).
    fn count_deals(&self, active_only: bool) -> Result<u64, Error> {
        if active_only {
            self.get_count("SELECT COUNT(*) FROM deals WHERE is_active = 1", vec![])
        } else {
            self.get_count("SELECT COUNT(*) FROM deals", vec![])
        }
    }

    /// Refer to [`databases::Database::insert_experience`](crate::core::databases::Database::insert_experience).
    fn insert_experience(&self, experience: &NewExperience, created_at: DateTime<Utc>) -> Result<Experience, Error> {
        let id = self.insert(
            "INSERT INTO experiences (title, description, destination_id, price, currency, duration, rating, review_count, \
             image_url, affiliate_link, affiliate_provider, category, is_active, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?)",
            vec![
                Value::from(&experience.title),
                Value::from(&experience.description),
                Value::from(experience.destination_id),
                Value::from(experience.price),
                Value::from(experience.currency()),
                Value::from(&experience.duration),
                Value::from(experience.rating),
                Value::from(experience.review_count.unwrap_or_default()),
                Value::from(&experience.image_url),
                Value::from(&experience.affiliate_link),
                Value::from(experience::DEFAULT_PROVIDER),
                Value::from(&experience.category),
                Value::from(created_at.timestamp()),
            ],
        )?;

        self.get_experience(id)?.ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::get_experience`](crate::core::databases::Database::get_experience).
    fn get_experience(&self, id: i64) -> Result<Option<Experience>, Error> {
        self.get_one(
            &format!("SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE id = ?"),
            vec![Value::from(id)],
            experience_row,
        )
    }

    /// Refer to [`databases::Database::get_experience_by_title`](crate::core::databases::Database::get_experience_by_title).
    fn get_experience_by_title(&self, title: &str) -> Result<Option<Experience>, Error> {
        self.get_one(
            &format!("SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE title = ? ORDER BY id LIMIT 1"),
            vec![Value::from(title)],
            experience_row,
        )
    }

    /// Refer to [`databases::Database::load_experiences`](crate::core::databases::Database::load_experiences).
    fn load_experiences(&self, filter: &ExperienceFilter, pagination: &Pagination) -> Result<Vec<Experience>, Error> {
        let mut sql = format!("SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE is_active = 1");
        let mut params = Vec::new();

        if let Some(destination_id) = filter.destination_id {
            sql.push_str(" AND destination_id = ?");
            params.push(Value::from(destination_id));
        }
        if let Some(category) = &filter.category {
            sql.push_str(" AND category = ?");
            params.push(Value::from(category));
        }

        sql.push_str(" ORDER BY rating IS NULL, rating DESC, id LIMIT ? OFFSET ?");
        params.push(Value::from(pagination.limit));
        params.push(Value::from(pagination.offset));

        self.get_many(&sql, params, experience_row)
    }

    /// Refer to [`databases::Database::insert_search_log`](crate::core::databases::Database::insert_search_log).
    fn insert_search_log(&self, search: &NewSearchLog, created_at: DateTime<Utc>) -> Result<(), Error> {
        self.insert(
            "INSERT INTO search_logs (search_type, origin, destination, check_in, check_out, travelers, ip_address, user_agent, \
             session_id, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            vec![
                Value::from(search.search_type.to_string()),
                Value::from(&search.origin),
                Value::from(&search.destination),
                optional_timestamp(search.check_in),
                optional_timestamp(search.check_out),
                Value::from(search.travelers),
                Value::from(&search.client.ip_address),
                Value::from(&search.client.user_agent),
                Value::from(&search.client.session_id),
                Value::from(created_at.timestamp()),
            ],
        )?;

        Ok(())
    }

    /// Refer to [`databases::Database::load_top_destinations`](crate::core::databases::Database::load_top_destinations).
    fn load_top_destinations(&self, limit: u32) -> Result<Vec<DestinationSearches>, Error> {
        self.get_many(
            "SELECT d.name, COUNT(s.id) AS search_count FROM destinations d \
             LEFT OUTER JOIN search_logs s ON d.name = s.destination \
             GROUP BY d.name ORDER BY search_count DESC, d.name ASC LIMIT ?",
            vec![Value::from(limit)],
            |row| {
                Ok(DestinationSearches {
                    name: column(row, 0)?,
                    searches: column::<i64>(row, 1)?.unsigned_abs(),
                })
            },
        )
    }

    /// Refer to [`databases::Database::insert_click`](crate::core::databases::Database::insert_click).
    fn insert_click(&self, click: &NewClick, created_at: DateTime<Utc>) -> Result<(), Error> {
        self.insert(
            "INSERT INTO click_tracking (deal_id, experience_id, link_type, affiliate_provider, ip_address, user_agent, referrer, \
             session_id, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            vec![
                Value::from(click.deal_id),
                Value::from(click.experience_id),
                Value::from(click.link_type.to_string()),
                Value::from(&click.affiliate_provider),
                Value::from(&click.client.ip_address),
                Value::from(&click.client.user_agent),
                Value::from(&click.client.referrer),
                Value::from(&click.client.session_id),
                Value::from(created_at.timestamp()),
            ],
        )?;

        Ok(())
    }

    /// Refer to [`databases::Database::count_clicks_since`](crate::core::databases::Database::count_clicks_since).
    fn count_clicks_since(&self, since: DateTime<Utc>) -> Result<u64, Error> {
        self.get_count(
            "SELECT COUNT(*) FROM click_tracking WHERE created_at >= ?",
            vec![Value::from(since.timestamp())],
        )
    }

    /// Refer to [`databases::Database::count_clicks_by_provider_since`](crate::core::databases::Database::count_clicks_by_provider_since).
    fn count_clicks_by_provider_since(&self, since: DateTime<Utc>) -> Result<Vec<(String, u64)>, Error> {
        self.get_many(
            "SELECT COALESCE(affiliate_provider, 'unknown') AS provider, COUNT(id) FROM click_tracking \
             WHERE created_at >= ? GROUP BY provider ORDER BY provider",
            vec![Value::from(since.timestamp())],
            |row| Ok((column(row, 0)?, column::<i64>(row, 1)?.unsigned_abs())),
        )
    }

    /// Refer to [`databases::Database::insert_price_alert`](crate::core::databases::Database::insert_price_alert).
    fn insert_price_alert(&self, alert: &NewPriceAlert, created_at: DateTime<Utc>) -> Result<PriceAlert, Error> {
        let id = self.insert(
            "INSERT INTO price_alerts (email, alert_type, origin, destination, target_price, is_active, created_at) \
             VALUES (?, ?, ?, ?, ?, 1, ?)",
            vec![
                Value::from(&alert.email),
                Value::from(alert.alert_type.to_string()),
                Value::from(&alert.origin),
                Value::from(&alert.destination),
                Value::from(alert.target_price),
                Value::from(created_at.timestamp()),
            ],
        )?;

        self.get_one(
            &format!("SELECT {PRICE_ALERT_COLUMNS} FROM price_alerts WHERE id = ?"),
            vec![Value::from(id)],
            price_alert_row,
        )?
        .ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::load_price_alerts_by_email`](crate::core::databases::Database::load_price_alerts_by_email).
    fn load_price_alerts_by_email(&self, email: &str) -> Result<Vec<PriceAlert>, Error> {
        self.get_many(
            &format!("SELECT {PRICE_ALERT_COLUMNS} FROM price_alerts WHERE email = ? AND is_active = 1 ORDER BY id"),
            vec![Value::from(email)],
            price_alert_row,
        )
    }

    /// Refer to [`databases::Database::deactivate_price_alert`](crate::core::databases::Database::deactivate_price_alert).
    ///
    /// `MySQL` only reports changed rows, so the alert is looked up first to
    /// answer `true` for an alert that was already inactive.
    fn deactivate_price_alert(&self, id: i64, email: &str) -> Result<bool, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let found = conn
            .exec_first::<i64, _, _>(
                "SELECT id FROM price_alerts WHERE id = ? AND email = ?",
                vec![Value::from(id), Value::from(email)],
            )?
            .is_some();

        if found {
            conn.exec_drop(
                "UPDATE price_alerts SET is_active = 0 WHERE id = ? AND email = ?",
                vec![Value::from(id), Value::from(email)],
            )?;
        }

        Ok(found)
    }
}
