//! Downloading personal puzzle inputs.
//!
//! Inputs are tied to an adventofcode.com account, so every request carries
//! the account's `session` cookie. Fetched inputs are stored as
//! `<inputs dir>/dayNN.txt`, which is where `solve` looks for them.

use crate::error::{Error, Result};
use crate::models::puzzle::Day;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

const BASE_URL: &str = "https://adventofcode.com/2024/day";

/// The site asks automated tools to identify themselves.
const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (puzzle input downloader)"
);

pub fn input_url(day: Day) -> String {
    format!("{}/{}/input", BASE_URL, day.number())
}

/// Downloads the puzzle input of `day` for the account owning `session`.
///
/// # Errors
/// - [`Error::MissingSession`] if `session` is blank
/// - [`Error::Network`] if the request could not be made
/// - [`Error::Http`] if the site answered with anything but 200
pub fn fetch_input(day: Day, session: &str) -> Result<String> {
    let session = session.trim();
    if session.is_empty() {
        return Err(Error::MissingSession);
    }

    let url = input_url(day);
    info!("downloading the input of day {} from '{}'", day, url);
    download(url, session)
}

fn download(url: String, session: &str) -> Result<String> {
    let response = ureq::get(url.as_str())
        .config()
        .http_status_as_error(false)
        .build()
        .header("Cookie", format!("session={}", session))
        .header("User-Agent", USER_AGENT)
        .call();
    // Statuses are not errors here, so only transport failures land in `Err`.
    let mut response = match response {
        Ok(r) => r,
        Err(e) => {
            return Err(Error::Network {
                url,
                reason: e.to_string(),
            });
        }
    };

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string();
    debug!(status, "download finished");

    match body {
        Ok(body) => check_response(url, status, body),
        Err(e) if status == 200 => Err(Error::Network {
            url,
            reason: format!("could not decode the response: {}", e),
        }),
        Err(_) => check_response(
            url,
            status,
            String::from("Couldn't transform http content to text"),
        ),
    }
}

fn check_response(url: String, status: u16, body: String) -> Result<String> {
    if status != 200 {
        return Err(Error::Http {
            url,
            status,
            body: body.trim().to_string(),
        });
    }
    if body.trim().is_empty() {
        return Err(Error::Network {
            url,
            reason: "the response was empty".to_string(),
        });
    }
    Ok(body)
}

/// Writes `body` to `dir/dayNN.txt`, creating `dir` when needed.
///
/// An existing file is only replaced when `force` is set.
pub fn save_input(dir: &Path, day: Day, body: &str, force: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.txt", day.file_stem()));

    if path.exists() && !force {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "'{}' already exists, pass --force to overwrite it",
                path.display()
            ),
        )));
    }

    fs::write(&path, body)?;
    info!("saved the input of day {} to '{}'", day, path.display());
    Ok(path)
}
