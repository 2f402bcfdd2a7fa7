//! Common test utilities for bikeshare tests
//!
//! Writes small CSV fixtures for every city into a temporary directory so
//! tests can drive the real loader.

#![allow(dead_code)]

use bikeshare_core::types::City;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const DEMOGRAPHIC_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
pub const WASHINGTON_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

/// Chicago trips spread over March to June
pub const CHICAGO_ROWS: &[&str] = &[
    "1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0",
    "955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0",
    "9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0",
    "304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Subscriber,Male,1986.0",
    "45207,2017-01-17 14:53:07,2017-01-17 15:02:01,534,Clark St & Randolph St,Desplaines St & Jackson Blvd,Subscriber,Male,1975.0",
    "1473887,2017-06-26 09:01:20,2017-06-26 09:11:06,586,Clinton St & Washington Blvd,Canal St & Taylor St,Subscriber,Male,1990.0",
    "961916,2017-05-26 09:41:44,2017-05-26 09:46:25,281,Damen Ave & Chicago Ave,Damen Ave & Augusta Blvd,Subscriber,Male,1983.0",
    "65924,2017-01-21 14:28:38,2017-01-21 14:40:41,723,Theater on the Lake,Sheffield Ave & Waveland Ave,Customer,,",
    "606841,2017-04-20 16:08:51,2017-04-20 16:20:16,685,Theater on the Lake,Lake Shore Dr & Wellington Ave,Customer,,",
    "135470,2017-02-15 15:36:36,2017-02-15 15:45:32,536,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Female,1992.0",
];

pub const NEW_YORK_ROWS: &[&str] = &[
    "5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0",
    "4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Male,1981.0",
    "2173887,2017-03-29 13:26:26,2017-03-29 13:48:31,1325,E 71 St & 1 Ave,Broadway & W 60 St,Subscriber,Male,1987.0",
    "3945638,2017-05-08 19:47:18,2017-05-08 19:59:01,703,Forsyth St & Broome St,Pike St & Monroe St,Customer,,",
];

pub const WASHINGTON_ROWS: &[&str] = &[
    "1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber",
    "482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber",
    "1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Subscriber",
    "665458,2017-04-02 07:48:35,2017-04-02 08:19:03,1827.341,Constitution Ave & 2nd St NW/DOL,M St & Pennsylvania Ave NW,Customer",
];

fn write_city(dir: &Path, city: City, header: &str, rows: &[&str]) {
    let mut contents = String::from(header);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    fs::write(dir.join(city.file_name()), contents).expect("Failed to write fixture");
}

/// Create a data directory holding all three city files
pub fn create_data_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_city(dir.path(), City::Chicago, DEMOGRAPHIC_HEADER, CHICAGO_ROWS);
    write_city(dir.path(), City::NewYorkCity, DEMOGRAPHIC_HEADER, NEW_YORK_ROWS);
    write_city(dir.path(), City::Washington, WASHINGTON_HEADER, WASHINGTON_ROWS);
    dir
}

/// Create a data directory whose Chicago file holds `count` generated trips
pub fn create_large_chicago(count: usize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let rows: Vec<String> = (0..count)
        .map(|i| {
            format!(
                "{i},2017-04-{:02} {:02}:15:00,2017-04-{:02} {:02}:30:00,900,Dock {i},Dock {},Subscriber,Male,1980.0",
                1 + i % 28,
                i % 24,
                1 + i % 28,
                i % 24,
                i + 1
            )
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    write_city(dir.path(), City::Chicago, DEMOGRAPHIC_HEADER, &rows);
    dir
}
