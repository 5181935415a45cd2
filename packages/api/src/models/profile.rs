//! # Profile record
//!
//! [`ProfileRecord`] is the flat account profile owned by the server and returned
//! by `GET /account` and `POST /update`. The client keeps a committed copy and,
//! while editing, an independent draft; both compare by value.
//!
//! The server is lenient about types: `age` may arrive as a JSON number or a
//! string, and fields may be missing or `null`. All are normalised here so the client
//! always holds plain strings that bind directly to text inputs.

use serde::{Deserialize, Deserializer, Serialize};

/// Account profile as exchanged with the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub twitter: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub github: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// One editable field of a [`ProfileRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Age,
    Gender,
    Location,
    Bio,
    Twitter,
    Linkedin,
    Github,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::Name,
        ProfileField::Age,
        ProfileField::Gender,
        ProfileField::Location,
        ProfileField::Bio,
        ProfileField::Twitter,
        ProfileField::Linkedin,
        ProfileField::Github,
    ];

    /// Form label for the edit surface.
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Age => "Age",
            ProfileField::Gender => "Gender",
            ProfileField::Location => "Location",
            ProfileField::Bio => "Bio",
            ProfileField::Twitter => "Twitter",
            ProfileField::Linkedin => "LinkedIn",
            ProfileField::Github => "GitHub",
        }
    }
}

/// A rendered link to one of the user's social profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub site: &'static str,
    pub handle: String,
    pub url: String,
}

impl ProfileRecord {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Age => &self.age,
            ProfileField::Gender => &self.gender,
            ProfileField::Location => &self.location,
            ProfileField::Bio => &self.bio,
            ProfileField::Twitter => &self.twitter,
            ProfileField::Linkedin => &self.linkedin,
            ProfileField::Github => &self.github,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Age => &mut self.age,
            ProfileField::Gender => &mut self.gender,
            ProfileField::Location => &mut self.location,
            ProfileField::Bio => &mut self.bio,
            ProfileField::Twitter => &mut self.twitter,
            ProfileField::Linkedin => &mut self.linkedin,
            ProfileField::Github => &mut self.github,
        };
        *slot = value;
    }

    /// Links for every non-empty social handle, in Twitter, LinkedIn, GitHub order.
    pub fn social_links(&self) -> Vec<SocialLink> {
        [
            ("Twitter", "https://twitter.com/", &self.twitter),
            ("LinkedIn", "https://www.linkedin.com/in/", &self.linkedin),
            ("GitHub", "https://github.com/", &self.github),
        ]
        .into_iter()
        .filter(|(_, _, handle)| !handle.trim().is_empty())
        .map(|(site, prefix, handle)| SocialLink {
            site,
            handle: handle.clone(),
            url: format!("{prefix}{}", handle.trim()),
        })
        .collect()
    }
}
