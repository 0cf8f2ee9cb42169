//! Configurations used in tests.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tripcompare_configuration::{Configuration, Threshold};
use tripcompare_primitives::DatabaseDriver;

use crate::random;

/// Affiliate marker configured by [`ephemeral_with_partners`].
pub const TEST_MARKER: &str = "tripcompare-test";

/// Partner API token configured by [`ephemeral_with_partners`].
pub const TEST_TOKEN: &str = "travelpayouts-test-token";

/// GetYourGuide partner id configured by [`ephemeral_with_partners`].
pub const TEST_GETYOURGUIDE_PARTNER_ID: &str = "GYG-TEST";

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one server at the same time.
///
/// No partner credentials are configured.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for the API
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

    // Ephemeral sqlite database
    let temp_directory = env::temp_dir();
    let random_db_id = random::string(16);
    let temp_file = temp_directory.join(format!("tripcompare_{random_db_id}.db"));
    config.database.driver = DatabaseDriver::Sqlite3;
    temp_file.to_str().unwrap().clone_into(&mut config.database.path);

    config
}

/// Ephemeral configuration with every partner credential set.
#[must_use]
pub fn ephemeral_with_partners() -> Configuration {
    let mut config = ephemeral();

    config.travelpayouts.token = Some(TEST_TOKEN.to_owned());
    config.travelpayouts.marker = Some(TEST_MARKER.to_owned());
    config.partners.getyourguide_partner_id = Some(TEST_GETYOURGUIDE_PARTNER_ID.to_owned());

    config
}

/// Ephemeral configuration with the admin routes open.
#[must_use]
pub fn ephemeral_without_access_tokens() -> Configuration {
    let mut config = ephemeral();

    config.http_api.access_tokens.clear();

    config
}

/// Ephemeral configuration with development-only operations disabled.
#[must_use]
pub fn ephemeral_production() -> Configuration {
    let mut config = ephemeral();

    config.app.debug = false;

    config
}
