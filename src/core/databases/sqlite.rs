//! The `SQLite3` database driver.
use std::fs;
use std::panic::Location;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use r2d2::Pool;
use r2d2_sqlite::rusqlite::types::{ToSql, Type};
use r2d2_sqlite::rusqlite::{self, params, params_from_iter, OptionalExtension, Row};
use r2d2_sqlite::SqliteConnectionManager;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tripcompare_located_error::Located;
use tripcompare_primitives::pagination::Pagination;
use tripcompare_primitives::DatabaseDriver;

use super::{contains_pattern, from_timestamp, Database, Error};
use crate::core::deal::{Deal, DealFilter, NewDeal};
use crate::core::destination::{Destination, NewDestination};
use crate::core::experience::{self, Experience, ExperienceFilter, NewExperience};
use crate::core::price_alert::{NewPriceAlert, PriceAlert};
use crate::core::subscriber::{NewSubscriber, Subscriber};
use crate::core::tracking::{DestinationSearches, NewClick, NewSearchLog};

const DRIVER: DatabaseDriver = DatabaseDriver::Sqlite3;

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

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

fn conversion_failure<E>(index: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(err))
}

fn json_column<T: DeserializeOwned>(row: &Row<'_>, index: usize) -> rusqlite::Result<T> {
    let text: String = row.get(index)?;
    serde_json::from_str(&text).map_err(|e| conversion_failure(index, e))
}

fn parsed_column<T>(row: &Row<'_>, index: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text: String = row.get(index)?;
    text.parse().map_err(|e| conversion_failure(index, e))
}

fn time_column(row: &Row<'_>, index: usize) -> rusqlite::Result<DateTime<Utc>> {
    Ok(from_timestamp(row.get(index)?))
}

fn optional_time_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    Ok(row.get::<_, Option<i64>>(index)?.map(from_timestamp))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|e| Error::invalid_data(e, DRIVER))
}

fn count(row: &Row<'_>) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(0)?.unsigned_abs())
}

fn subscriber_row(row: &Row<'_>) -> rusqlite::Result<Subscriber> {
    Ok(Subscriber {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        is_active: row.get(3)?,
        source: row.get(4)?,
        preferences: json_column(row, 5)?,
        created_at: time_column(row, 6)?,
        updated_at: optional_time_column(row, 7)?,
    })
}

fn destination_row(row: &Row<'_>) -> rusqlite::Result<Destination> {
    Ok(Destination {
        id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        city_code: row.get(3)?,
        description: row.get(4)?,
        image_url: row.get(5)?,
        latitude: row.get(6)?,
        longitude: row.get(7)?,
        is_featured: row.get(8)?,
        avg_flight_price: row.get(9)?,
        avg_hotel_price: row.get(10)?,
        best_time_to_visit: row.get(11)?,
        tags: json_column(row, 12)?,
        created_at: time_column(row, 13)?,
        updated_at: optional_time_column(row, 14)?,
    })
}

fn deal_row(row: &Row<'_>) -> rusqlite::Result<Deal> {
    Ok(Deal {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        deal_type: parsed_column(row, 3)?,
        destination_id: row.get(4)?,
        origin_city: row.get(5)?,
        original_price: row.get(6)?,
        deal_price: row.get(7)?,
        discount_percentage: row.get(8)?,
        currency: row.get(9)?,
        affiliate_link: row.get(10)?,
        affiliate_provider: row.get(11)?,
        image_url: row.get(12)?,
        valid_from: optional_time_column(row, 13)?,
        valid_until: optional_time_column(row, 14)?,
        travel_dates: row.get(15)?,
        is_active: row.get(16)?,
        is_featured: row.get(17)?,
        click_count: row.get(18)?,
        booking_count: row.get(19)?,
        created_at: time_column(row, 20)?,
        updated_at: optional_time_column(row, 21)?,
    })
}

fn experience_row(row: &Row<'_>) -> rusqlite::Result<Experience> {
    Ok(Experience {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        destination_id: row.get(3)?,
        price: row.get(4)?,
        currency: row.get(5)?,
        duration: row.get(6)?,
        rating: row.get(7)?,
        review_count: row.get(8)?,
        image_url: row.get(9)?,
        affiliate_link: row.get(10)?,
        affiliate_provider: row.get(11)?,
        category: row.get(12)?,
        is_active: row.get(13)?,
        created_at: time_column(row, 14)?,
    })
}

fn price_alert_row(row: &Row<'_>) -> rusqlite::Result<PriceAlert> {
    Ok(PriceAlert {
        id: row.get(0)?,
        email: row.get(1)?,
        alert_type: parsed_column(row, 2)?,
        origin: row.get(3)?,
        destination: row.get(4)?,
        target_price: row.get(5)?,
        current_lowest_price: row.get(6)?,
        is_active: row.get(7)?,
        last_notified: optional_time_column(row, 8)?,
        created_at: time_column(row, 9)?,
    })
}

impl Sqlite {
    fn get_one<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Option<T>, Error>
    where
        P: rusqlite::Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.query_row(sql, params, f).optional()?)
    }

    fn get_many<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>, Error>
    where
        P: rusqlite::Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare(sql)?;

        let rows = stmt.query_map(params, f)?;

        Ok(rows.collect::<Result<Vec<T>, rusqlite::Error>>()?)
    }

    fn get_count<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<u64, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        Ok(conn.query_row(sql, params, count)?)
    }
}

impl Database for Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// Refer to [`databases::Database::new`](crate::core::databases::Database::new).
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    fn new(db_path: &str) -> Result<Sqlite, Error> {
        if let Some(directory) = Path::new(db_path).parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(directory).map_err(|e| Error::StorageDirectory {
                source: Located(e).into(),
                driver: DRIVER,
            })?;
        }

        let cm = SqliteConnectionManager::file(db_path);
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }

    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_subscribers_table = "
        CREATE TABLE IF NOT EXISTS subscribers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            name TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            source TEXT NOT NULL DEFAULT 'website',
            preferences TEXT NOT NULL DEFAULT '{}',
            created_at INTEGER NOT NULL,
            updated_at INTEGER
        );";

        let create_destinations_table = "
        CREATE TABLE IF NOT EXISTS destinations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            country TEXT NOT NULL,
            city_code TEXT,
            description TEXT,
            image_url TEXT,
            latitude REAL,
            longitude REAL,
            is_featured INTEGER NOT NULL DEFAULT 0,
            avg_flight_price REAL,
            avg_hotel_price REAL,
            best_time_to_visit TEXT,
            tags TEXT NOT NULL DEFAULT '[]',
            created_at INTEGER NOT NULL,
            updated_at INTEGER
        );";

        let create_deals_table = "
        CREATE TABLE IF NOT EXISTS deals (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            deal_type TEXT NOT NULL,
            destination_id INTEGER REFERENCES destinations(id),
            origin_city TEXT,
            original_price REAL NOT NULL,
            deal_price REAL NOT NULL,
            discount_percentage INTEGER NOT NULL DEFAULT 0,
            currency TEXT NOT NULL DEFAULT 'EUR',
            affiliate_link TEXT,
            affiliate_provider TEXT,
            image_url TEXT,
            valid_from INTEGER,
            valid_until INTEGER,
            travel_dates TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_featured INTEGER NOT NULL DEFAULT 0,
            click_count INTEGER NOT NULL DEFAULT 0,
            booking_count INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL,
            updated_at INTEGER
        );";

        let create_experiences_table = "
        CREATE TABLE IF NOT EXISTS experiences (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            destination_id INTEGER REFERENCES destinations(id),
            price REAL NOT NULL,
            currency TEXT NOT NULL DEFAULT 'EUR',
            duration TEXT,
            rating REAL,
            review_count INTEGER NOT NULL DEFAULT 0,
            image_url TEXT,
            affiliate_link TEXT,
            affiliate_provider TEXT NOT NULL DEFAULT 'getyourguide',
            category TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at INTEGER NOT NULL
        );";

        let create_search_logs_table = "
        CREATE TABLE IF NOT EXISTS search_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            search_type TEXT NOT NULL,
            origin TEXT,
            destination TEXT NOT NULL,
            check_in INTEGER,
            check_out INTEGER,
            travelers INTEGER NOT NULL DEFAULT 1,
            ip_address TEXT,
            user_agent TEXT,
            session_id TEXT,
            created_at INTEGER NOT NULL
        );";

        let create_click_tracking_table = "
        CREATE TABLE IF NOT EXISTS click_tracking (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            deal_id INTEGER REFERENCES deals(id),
            experience_id INTEGER REFERENCES experiences(id),
            link_type TEXT NOT NULL,
            affiliate_provider TEXT,
            ip_address TEXT,
            user_agent TEXT,
            referrer TEXT,
            session_id TEXT,
            created_at INTEGER NOT NULL
        );";

        let create_price_alerts_table = "
        CREATE TABLE IF NOT EXISTS price_alerts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL,
            alert_type TEXT NOT NULL,
            origin TEXT,
            destination TEXT NOT NULL,
            target_price REAL,
            current_lowest_price REAL,
            is_active INTEGER NOT NULL DEFAULT 1,
            last_notified INTEGER,
            created_at INTEGER NOT NULL
        );";

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(create_subscribers_table, [])?;
        conn.execute(create_destinations_table, [])?;
        conn.execute(create_deals_table, [])?;
        conn.execute(create_experiences_table, [])?;
        conn.execute(create_search_logs_table, [])?;
        conn.execute(create_click_tracking_table, [])?;
        conn.execute(create_price_alerts_table, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::drop_database_tables`](crate::core::databases::Database::drop_database_tables).
    fn drop_database_tables(&self) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute("DROP TABLE click_tracking;", [])
            .and_then(|_| conn.execute("DROP TABLE search_logs;", []))
            .and_then(|_| conn.execute("DROP TABLE price_alerts;", []))
            .and_then(|_| conn.execute("DROP TABLE experiences;", []))
            .and_then(|_| conn.execute("DROP TABLE deals;", []))
            .and_then(|_| conn.execute("DROP TABLE destinations;", []))
            .and_then(|_| conn.execute("DROP TABLE subscribers;", []))?;

        Ok(())
    }

    /// Refer to [`databases::Database::insert_subscriber`](crate::core::databases::Database::insert_subscriber).
    fn insert_subscriber(&self, subscriber: &NewSubscriber, created_at: DateTime<Utc>) -> Result<Subscriber, Error> {
        let id = {
            let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

            conn.execute(
                "INSERT INTO subscribers (email, name, is_active, source, preferences, created_at) VALUES (?1, ?2, 1, ?3, ?4, ?5)",
                params![
                    subscriber.email,
                    subscriber.name,
                    subscriber.source(),
                    to_json(&subscriber.preferences())?,
                    created_at.timestamp()
                ],
            )?;

            conn.last_insert_rowid()
        };

        self.get_one(
            &format!("SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE id = ?1"),
            [id],
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
            &format!("SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE email = ?1"),
            [email],
            subscriber_row,
        )
    }

    /// Refer to [`databases::Database::load_subscribers`](crate::core::databases::Database::load_subscribers).
    fn load_subscribers(&self, pagination: &Pagination, active_only: bool) -> Result<Vec<Subscriber>, Error> {
        let filter = if active_only { "WHERE is_active = 1" } else { "" };

        self.get_many(
            &format!("SELECT {SUBSCRIBER_COLUMNS} FROM subscribers {filter} ORDER BY id LIMIT ?1 OFFSET ?2"),
            params![pagination.limit, pagination.offset],
            subscriber_row,
        )
    }

    /// Refer to [`databases::Database::save_subscriber`](crate::core::databases::Database::save_subscriber).
    fn save_subscriber(&self, subscriber: &Subscriber) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(
            "UPDATE subscribers SET name = ?1, is_active = ?2, preferences = ?3, updated_at = ?4 WHERE id = ?5",
            params![
                subscriber.name,
                subscriber.is_active,
                to_json(&subscriber.preferences)?,
                subscriber.updated_at.map(|at| at.timestamp()),
                subscriber.id
            ],
        )?;

        Ok(())
    }

    /// Refer to [`databases::Database::count_subscribers`](crate::core::databases::Database::count_subscribers).
    fn count_subscribers(&self, active_only: bool) -> Result<u64, Error> {
        if active_only {
            self.get_count("SELECT COUNT(*) FROM subscribers WHERE is_active = 1", [])
        } else {
            self.get_count("SELECT COUNT(*) FROM subscribers", [])
        }
    }

    /// Refer to [`databases::Database::count_subscribers_since`](crate::core::databases::Database::count_subscribers_since).
    fn count_subscribers_since(&self, since: DateTime<Utc>) -> Result<u64, Error> {
        self.get_count("SELECT COUNT(*) FROM subscribers WHERE created_at >= ?1", [since.timestamp()])
    }

    /// Refer to [`databases::Database::insert_destination`](crate::core::databases::Database::insert_destination).
    fn insert_destination(&self, destination: &NewDestination, created_at: DateTime<Utc>) -> Result<Destination, Error> {
        let id = {
            let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

            conn.execute(
                "INSERT INTO destinations (name, country, city_code, description, image_url, latitude, longitude, is_featured, \
                 avg_flight_price, avg_hotel_price, best_time_to_visit, tags, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    destination.name,
                    destination.country,
                    destination.city_code,
                    destination.description,
                    destination.image_url,
                    destination.latitude,
                    destination.longitude,
                    destination.is_featured,
                    destination.avg_flight_price,
                    destination.avg_hotel_price,
                    destination.best_time_to_visit,
                    to_json(&destination.tags)?,
                    created_at.timestamp()
                ],
            )?;

            conn.last_insert_rowid()
        };

        self.get_destination(id)?.ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::get_destination`](crate::core::databases::Database::get_destination).
    fn get_destination(&self, id: i64) -> Result<Option<Destination>, Error> {
        self.get_one(
            &format!("SELECT {DESTINATION_COLUMNS} FROM destinations WHERE id = ?1"),
            [id],
            destination_row,
        )
    }

    /// Refer to [`databases::Database::get_destination_by_name`](crate::core::databases::Database::get_destination_by_name).
    fn get_destination_by_name(&self, name: &str) -> Result<Option<Destination>, Error> {
        self.get_one(
            &format!("SELECT {DESTINATION_COLUMNS} FROM destinations WHERE name = ?1 ORDER BY id LIMIT 1"),
            [name],
            destination_row,
        )
    }

    /// Refer to [`databases::Database::load_destinations`](crate::core::databases::Database::load_destinations).
    fn load_destinations(&self, pagination: &Pagination, featured_only: bool) -> Result<Vec<Destination>, Error> {
        let filter = if featured_only { "WHERE is_featured = 1" } else { "" };

        self.get_many(
            &format!("SELECT {DESTINATION_COLUMNS} FROM destinations {filter} ORDER BY id LIMIT ?1 OFFSET ?2"),
            params![pagination.limit, pagination.offset],
            destination_row,
        )
    }

    /// Refer to [`databases::Database::search_destinations`](crate::core::databases::Database::search_destinations).
    fn search_destinations(&self, query: &str, limit: u32) -> Result<Vec<Destination>, Error> {
        self.get_many(
            &format!(
                "SELECT {DESTINATION_COLUMNS} FROM destinations \
                 WHERE LOWER(name) LIKE ?1 OR LOWER(country) LIKE ?1 OR LOWER(COALESCE(city_code, '')) LIKE ?1 \
                 ORDER BY id LIMIT ?2"
            ),
            params![contains_pattern(query), limit],
            destination_row,
        )
    }

    /// Refer to [`databases::Database::save_destination`](crate::core::databases::Database::save_destination).
    fn save_destination(&self, destination: &Destination) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(
            "UPDATE destinations SET name = ?1, country = ?2, city_code = ?3, description = ?4, image_url = ?5, latitude = ?6, \
             longitude = ?7, is_featured = ?8, avg_flight_price = ?9, avg_hotel_price = ?10, best_time_to_visit = ?11, tags = ?12, \
             updated_at = ?13 WHERE id = ?14",
            params![
                destination.name,
                destination.country,
                destination.city_code,
                destination.description,
                destination.image_url,
                destination.latitude,
                destination.longitude,
                destination.is_featured,
                destination.avg_flight_price,
                destination.avg_hotel_price,
                destination.best_time_to_visit,
                to_json(&destination.tags)?,
                destination.updated_at.map(|at| at.timestamp()),
                destination.id
            ],
        )?;

        Ok(())
    }

    /// Refer to [`databases::Database::insert_deal`](crate::core::databases::Database::insert_deal).
    fn insert_deal(&self, deal: &NewDeal, created_at: DateTime<Utc>) -> Result<Deal, Error> {
        let id = {
            let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

            conn.execute(
                "INSERT INTO deals (title, description, deal_type, destination_id, origin_city, original_price, deal_price, \
                 discount_percentage, currency, affiliate_link, affiliate_provider, image_url, valid_from, valid_until, \
                 travel_dates, is_active, is_featured, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, 1, ?16, ?17)",
                params![
                    deal.title,
                    deal.description,
                    deal.deal_type.to_string(),
                    deal.destination_id,
                    deal.origin_city,
                    deal.original_price,
                    deal.deal_price,
                    deal.discount_percentage(),
                    deal.currency(),
                    deal.affiliate_link,
                    deal.affiliate_provider,
                    deal.image_url,
                    deal.valid_from.map(|at| at.timestamp()),
                    deal.valid_until.map(|at| at.timestamp()),
                    deal.travel_dates,
                    deal.is_featured,
                    created_at.timestamp()
                ],
            )?;

            conn.last_insert_rowid()
        };

        self.get_deal(id)?.ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::get_deal`](crate::core::databases::Database::get_deal).
    fn get_deal(&self, id: i64) -> Result<Option<Deal>, Error> {
        self.get_one(&format!("SELECT {DEAL_COLUMNS} FROM deals WHERE id = ?1"), [id], deal_row)
    }

    /// Refer to [`databases::Database::get_deal_by_title`](crate::core::databases::Database::get_deal_by_title).
    fn get_deal_by_title(&self, title: &str) -> Result<Option<Deal>, Error> {
        self.get_one(
            &format!("SELECT {DEAL_COLUMNS} FROM deals WHERE title = ?1 ORDER BY id LIMIT 1"),
            [title],
            deal_row,
        )
    }

    /// Refer to [`databases::Database::load_deals`](crate::core::databases::Database::load_deals).
    fn load_deals(&self, filter: &DealFilter, pagination: &Pagination) -> Result<Vec<Deal>, Error> {
        let mut sql = format!("SELECT {DEAL_COLUMNS} FROM deals WHERE 1 = 1");
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(deal_type) = filter.deal_type {
            sql.push_str(" AND deal_type = ?");
            values.push(Box::new(deal_type.to_string()));
        }
        if filter.featured_only {
            sql.push_str(" AND is_featured = 1");
        }
        if filter.active_only {
            sql.push_str(" AND is_active = 1");
        }

        sql.push_str(" ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?");
        values.push(Box::new(pagination.limit));
        values.push(Box::new(pagination.offset));

        self.get_many(&sql, params_from_iter(values.iter()), deal_row)
    }

    /// Refer to [`databases::Database::load_deals_by_destination`](crate::core::databases::Database::load_deals_by_destination).
    fn load_deals_by_destination(&self, destination_id: i64, limit: u32) -> Result<Vec<Deal>, Error> {
        self.get_many(
            &format!("SELECT {DEAL_COLUMNS} FROM deals WHERE destination_id = ?1 AND is_active = 1 ORDER BY id LIMIT ?2"),
            params![destination_id, limit],
            deal_row,
        )
    }

    /// Refer to [`databases::Database::save_deal`](crate::core::databases::Database::save_deal).
    fn save_deal(&self, deal: &Deal) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(
            "UPDATE deals SET title = ?1, description = ?2, deal_price = ?3, discount_percentage = ?4, affiliate_link = ?5, \
             is_active = ?6, is_featured = ?7, updated_at = ?8 WHERE id = ?9",
            params![
                deal.title,
                deal.description,
                deal.deal_price,
                deal.discount_percentage,
                deal.affiliate_link,
                deal.is_active,
                deal.is_featured,
                deal.updated_at.map(|at| at.timestamp()),
                deal.id
            ],
        )?;

        Ok(())
    }

    /// Refer to [`databases::Database::increment_deal_clicks`](crate::core::databases::Database::increment_deal_clicks).
    fn increment_deal_clicks(&self, id: i64) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute("UPDATE deals SET click_count = click_count + 1 WHERE id = ?1", [id])?;

        Ok(())
    }

    /// Refer to [`databases::Database::count_deals`](crate::core::databases::Database::count_deals).
    fn count_deals(&self, active_only: bool) -> Result<u64, Error> {
        if active_only {
            self.get_count("SELECT COUNT(*) FROM deals WHERE is_active = 1", [])
        } else {
            self.get_count("SELECT COUNT(*) FROM deals", [])
        }
    }

    /// Refer to [`databases::Database::insert_experience`](crate::core::databases::Database::insert_experience).
    fn insert_experience(&self, experience: &NewExperience, created_at: DateTime<Utc>) -> Result<Experience, Error> {
        let id = {
            let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

            conn.execute(
                "INSERT INTO experiences (title, description, destination_id, price, currency, duration, rating, review_count, \
                 image_url, affiliate_link, affiliate_provider, category, is_active, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, 1, ?13)",
                params![
                    experience.title,
                    experience.description,
                    experience.destination_id,
                    experience.price,
                    experience.currency(),
                    experience.duration,
                    experience.rating,
                    experience.review_count.unwrap_or_default(),
                    experience.image_url,
                    experience.affiliate_link,
                    experience::DEFAULT_PROVIDER,
                    experience.category,
                    created_at.timestamp()
                ],
            )?;

            conn.last_insert_rowid()
        };

        self.get_experience(id)?.ok_or(Error::InsertFailed {
            location: Location::caller(),
            driver: DRIVER,
        })
    }

    /// Refer to [`databases::Database::get_experience`](crate::core::databases::Database::get_experience).
    fn get_experience(&self, id: i64) -> Result<Option<Experience>, Error> {
        self.get_one(
            &format!("SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE id = ?1"),
            [id],
            experience_row,
        )
    }

    /// Refer to [`databases::Database::get_experience_by_title`](crate::core::databases::Database::get_experience_by_title).
    fn get_experience_by_title(&self, title: &str) -> Result<Option<Experience>, Error> {
        self.get_one(
            &format!("SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE title = ?1 ORDER BY id LIMIT 1"),
            [title],
            experience_row,
        )
    }

    /// Refer to [`databases::Database::load_experiences`](crate::core::databases::Database::load_experiences).
    fn load_experiences(&self, filter: &ExperienceFilter, pagination: &Pagination) -> Result<Vec<Experience>, Error> {
        let mut sql = format!("SELECT {EXPERIENCE_COLUMNS} FROM experiences WHERE is_active = 1");
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(destination_id) = filter.destination_id {
            sql.push_str(" AND destination_id = ?");
            values.push(Box::new(destination_id));
        }
        if let Some(category) = &filter.category {
            sql.push_str(" AND category = ?");
            values.push(Box::new(category.clone()));
        }

        sql.push_str(" ORDER BY rating IS NULL, rating DESC, id LIMIT ? OFFSET ?");
        values.push(Box::new(pagination.limit));
        values.push(Box::new(pagination.offset));

        self.get_many(&sql, params_from_iter(values.iter()), experience_row)
    }

    /// Refer to [`databases::Database::insert_search_log`](crate::core::databases::Database::insert_search_log).
    fn insert_search_log(&self, search: &NewSearchLog, created_at: DateTime<Utc>) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO search_logs (search_type, origin, destination, check_in, check_out, travelers, ip_address, user_agent, \
             session_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                search.search_type.to_string(),
                search.origin,
                search.destination,
                search.check_in.map(|at| at.timestamp()),
                search.check_out.map(|at| at.timestamp()),
                search.travelers,
                search.client.ip_address,
                search.client.user_agent,
                search.client.session_id,
                created_at.timestamp()
            ],
        )?;

        if insert == 0 {
            return Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            });
        }

        Ok(())
    }

    /// Refer to [`databases::Database::load_top_destinations`](crate::core::databases::Database::load_top_destinations).
    fn load_top_destinations(&self, limit: u32) -> Result<Vec<DestinationSearches>, Error> {
        self.get_many(
            "SELECT d.name, COUNT(s.id) AS search_count FROM destinations d \
             LEFT OUTER JOIN search_logs s ON d.name = s.destination \
             GROUP BY d.name ORDER BY search_count DESC, d.name ASC LIMIT ?1",
            [limit],
            |row| {
                Ok(DestinationSearches {
                    name: row.get(0)?,
                    searches: row.get::<_, i64>(1)?.unsigned_abs(),
                })
            },
        )
    }

    /// Refer to [`databases::Database::insert_click`](crate::core::databases::Database::insert_click).
    fn insert_click(&self, click: &NewClick, created_at: DateTime<Utc>) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let insert = conn.execute(
            "INSERT INTO click_tracking (deal_id, experience_id, link_type, affiliate_provider, ip_address, user_agent, referrer, \
             session_id, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                click.deal_id,
                click.experience_id,
                click.link_type.to_string(),
                click.affiliate_provider,
                click.client.ip_address,
                click.client.user_agent,
                click.client.referrer,
                click.client.session_id,
                created_at.timestamp()
            ],
        )?;

        if insert == 0 {
            return Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            });
        }

        Ok(())
    }

    /// Refer to [`databases::Database::count_clicks_since`](crate::core::databases::Database::count_clicks_since).
    fn count_clicks_since(&self, since: DateTime<Utc>) -> Result<u64, Error> {
        self.get_count("SELECT COUNT(*) FROM click_tracking WHERE created_at >= ?1", [since.timestamp()])
    }

    /// Refer to [`databases::Database::count_clicks_by_provider_since`](crate::core::databases::Database::count_clicks_by_provider_since).
    fn count_clicks_by_provider_since(&self, since: DateTime<Utc>) -> Result<Vec<(String, u64)>, Error> {
        self.get_many(
            "SELECT COALESCE(affiliate_provider, 'unknown') AS provider, COUNT(id) FROM click_tracking \
             WHERE created_at >= ?1 GROUP BY provider ORDER BY provider",
            [since.timestamp()],
            |row| Ok((row.get(0)?, row.get::<_, i64>(1)?.unsigned_abs())),
        )
    }

    /// Refer to [`databases::Database::insert_price_alert`](crate::core::databases::Database::insert_price_alert).
    fn insert_price_alert(&self, alert: &NewPriceAlert, created_at: DateTime<Utc>) -> Result<PriceAlert, Error> {
        let id = {
            let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

            conn.execute(
                "INSERT INTO price_alerts (email, alert_type, origin, destination, target_price, is_active, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
                params![
                    alert.email,
                    alert.alert_type.to_string(),
                    alert.origin,
                    alert.destination,
                    alert.target_price,
                    created_at.timestamp()
                ],
            )?;

            conn.last_insert_rowid()
        };

        self.get_one(
            &format!("SELECT {PRICE_ALERT_COLUMNS} FROM price_alerts WHERE id = ?1"),
            [id],
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
            &format!("SELECT {PRICE_ALERT_COLUMNS} FROM price_alerts WHERE email = ?1 AND is_active = 1 ORDER BY id"),
            [email],
            price_alert_row,
        )
    }

    /// Refer to [`databases::Database::deactivate_price_alert`](crate::core::databases::Database::deactivate_price_alert).
    fn deactivate_price_alert(&self, id: i64, email: &str) -> Result<bool, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let updated = conn.execute(
            "UPDATE price_alerts SET is_active = 0 WHERE id = ?1 AND email = ?2",
            params![id, email],
        )?;

        Ok(updated > 0)
    }
}
