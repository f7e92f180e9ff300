//! Built-in roster schemas
//!
//! Two rosters ship with the crate: "talent" (name plus four social URL
//! slots) and "athlete" (name, email, sport multiselect, three social URL
//! slots). Both carry one record rule requiring at least one social URL.
//! The registry itself has no dynamic behavior; schemas are data.

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldDef, FieldKind, RecordRule, Schema};
use crate::roster::Record;

/// Fixed sport option list for the athlete roster.
pub const SPORTS: &[&str] = &[
    "Basketball",
    "Football",
    "Tennis",
    "Baseball",
    "Soccer",
    "Golf",
    "Volleyball",
    "Swimming",
    "Track & Field",
    "Cross Country",
    "Field Hockey",
    "Bowling",
    "Fencing",
    "Gymnastics",
    "Ice Hockey",
    "Rifle",
    "Skiing",
    "Diving",
    "Wrestling",
    "Beach Volleyball",
    "Lacrosse",
    "Rowing",
    "Softball",
    "Water Polo",
];

fn require_one_social_rule() -> RecordRule {
    RecordRule::RequireAtLeastOneOfKind {
        target_kind: FieldKind::Url,
        message: "At least one social media URL is required".into(),
    }
}

fn talent() -> Schema {
    Schema {
        roster_id: "talent".into(),
        title: "Talent Roster".into(),
        storage_key: "talent-roster".into(),
        export_stem: "talent-submission".into(),
        fields: vec![
            FieldDef::required_text("talentName", "Talent Name"),
            FieldDef::optional_url("primarySocial", "Primary Social"),
            FieldDef::optional_url("social2", "Social 2"),
            FieldDef::optional_url("social3", "Social 3"),
            FieldDef::optional_url("social4", "Social 4"),
        ],
        rules: vec![require_one_social_rule()],
        default_records: vec![
            Record::default()
                .with_text("talentName", "Jane Doe")
                .with_text("primarySocial", "https://www.tiktok.com/@janedoe")
                .with_text("social2", "https://www.youtube.com/@JaneDoe")
                .with_text("social3", "")
                .with_text("social4", ""),
            Record::default()
                .with_text("talentName", "John Smith")
                .with_text("primarySocial", "https://www.instagram.com/johnsmith")
                .with_text("social2", "")
                .with_text("social3", "")
                .with_text("social4", ""),
        ],
    }
}

fn athlete() -> Schema {
    let sports = SPORTS.iter().map(|s| s.to_string()).collect();
    Schema {
        roster_id: "athlete".into(),
        title: "Athlete Roster".into(),
        storage_key: "athlete-roster".into(),
        export_stem: "athlete-submission".into(),
        fields: vec![
            FieldDef::required_text("talentName", "Talent Name"),
            FieldDef::optional_email("email", "Email"),
            FieldDef::required_multiselect("sports", "Sport(s)", sports),
            FieldDef::optional_url("primarySocial", "Primary Social"),
            FieldDef::optional_url("social2", "Social 2"),
            FieldDef::optional_url("social3", "Social 3"),
        ],
        rules: vec![require_one_social_rule()],
        default_records: vec![
            Record::default()
                .with_text("talentName", "Jane Doe")
                .with_text("email", "")
                .with_selection("sports", ["Basketball", "Track & Field"])
                .with_text("primarySocial", "https://www.tiktok.com/@janedoe")
                .with_text("social2", "https://www.youtube.com/@JaneDoe")
                .with_text("social3", ""),
            Record::default()
                .with_text("talentName", "John Smith")
                .with_text("email", "")
                .with_selection("sports", ["Football"])
                .with_text("primarySocial", "https://www.instagram.com/johnsmith")
                .with_text("social2", "")
                .with_text("social3", ""),
        ],
    }
}

/// In-memory registry of roster schemas.
pub struct Registry {
    schemas: Vec<Schema>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: Vec::new(),
        }
    }

    /// Creates a registry holding the built-in rosters.
    ///
    /// The built-in schemas are constants asserted correct by the test
    /// suite, so no structural validation runs here.
    pub fn builtin() -> Self {
        Self {
            schemas: vec![talent(), athlete()],
        }
    }

    /// Registers a schema, validating its structure first.
    pub fn register(&mut self, schema: Schema) -> SchemaResult<()> {
        schema
            .validate_structure()
            .map_err(|reason| SchemaError::MalformedSchema {
                roster_id: schema.roster_id.clone(),
                reason,
            })?;

        if self.schemas.iter().any(|s| s.roster_id == schema.roster_id) {
            return Err(SchemaError::DuplicateRoster(schema.roster_id));
        }

        self.schemas.push(schema);
        Ok(())
    }

    /// Looks up a schema by roster id.
    pub fn get(&self, roster_id: &str) -> SchemaResult<&Schema> {
        self.schemas
            .iter()
            .find(|s| s.roster_id == roster_id)
            .ok_or_else(|| SchemaError::UnknownRoster(roster_id.to_string()))
    }

    /// Returns all registered schemas in registration order.
    pub fn all(&self) -> &[Schema] {
        &self.schemas
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
