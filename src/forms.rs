//! Version-item categories and their form-field schemas.
//!
//! Each announcement item belongs to exactly one category, and each category
//! carries a fixed list of field descriptors the editing UI renders and the
//! item payload is expected to follow. Rerun categories share the field list
//! of their new-release counterpart.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Kind of input a field takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    TextArea,
    /// Fixed choice list.
    Select(&'static [&'static str]),
    Checkbox,
}

/// One field of a category's item payload.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Key in the item's `data` object.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

const fn text(name: &'static str, label: &'static str, required: bool) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        kind: FieldKind::Text,
        required,
        placeholder: None,
    }
}

const fn number(name: &'static str, label: &'static str, required: bool) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        kind: FieldKind::Number,
        required,
        placeholder: None,
    }
}

const fn text_area(name: &'static str, label: &'static str, required: bool) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        kind: FieldKind::TextArea,
        required,
        placeholder: None,
    }
}

const fn select(
    name: &'static str,
    label: &'static str,
    required: bool,
    options: &'static [&'static str],
) -> FieldDescriptor {
    FieldDescriptor {
        name,
        label,
        kind: FieldKind::Select(options),
        required,
        placeholder: None,
    }
}

const fn image_url(label: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        name: "image_url",
        label,
        kind: FieldKind::Text,
        required: false,
        placeholder: Some("https://..."),
    }
}

const PATH_OPTIONS: &[&str] = &[
    "Destruction",
    "Hunt",
    "Erudition",
    "Harmony",
    "Nihility",
    "Preservation",
    "Abundance",
    "Remembrance",
];

const ELEMENT_OPTIONS: &[&str] = &[
    "Physical",
    "Fire",
    "Ice",
    "Lightning",
    "Wind",
    "Quantum",
    "Imaginary",
];

const REGION_OPTIONS: &[&str] = &[
    "Astral Express",
    "Herta Space Station",
    "Jarilo-VI",
    "Xianzhou Luofu",
    "Penacony",
    "Amphoreus",
];

const NEW_FIELD_FIELDS: &[FieldDescriptor] = &[
    text("name", "Area name", true),
    text("name_en", "English name", false),
    image_url("Image URL"),
    select("region", "Region", true, REGION_OPTIONS),
    text("sub_region", "Sub-region", false),
];

const NEW_PATH_FIELDS: &[FieldDescriptor] = &[
    text("name", "Path name", true),
    image_url("Icon URL"),
    select(
        "role",
        "Role",
        true,
        &["DPS", "Offensive support", "Defensive support", "Other"],
    ),
    number("taunt_value", "Taunt value", true),
    text_area("characteristics", "Characteristics", false),
];

const NEW_CHARACTER_FIELDS: &[FieldDescriptor] = &[
    text("name", "Character name", true),
    text("nickname", "Nickname", false),
    image_url("Character image URL"),
    select("gender", "Gender", true, &["Male", "Female"]),
    text("affiliation", "Affiliation", false),
    select("element", "Element", true, ELEMENT_OPTIONS),
    select("path", "Path", true, PATH_OPTIONS),
    select("rarity", "Rarity", true, &["4-star", "5-star"]),
    text("name_ko", "Korean name", false),
    text("name_en", "English name", false),
    text("name_cn", "Chinese name", false),
    text("name_jp", "Japanese name", false),
    text("voice_actor_ko", "Korean voice actor", false),
    text("voice_actor_en", "English voice actor", false),
    text("voice_actor_cn", "Chinese voice actor", false),
    text("voice_actor_jp", "Japanese voice actor", false),
];

const NEW_LIGHTCONE_FIELDS: &[FieldDescriptor] = &[
    text("name", "Light cone name", true),
    image_url("Light cone image URL"),
    select("path", "Path", true, PATH_OPTIONS),
    select("rarity", "Rarity", true, &["3-star", "4-star", "5-star"]),
    number("base_hp", "Base HP", false),
    number("base_atk", "Base ATK", false),
    number("base_def", "Base DEF", false),
    text("skill_name", "Skill name", false),
    text_area("skill_description", "Skill description", false),
    text("acquisition_method", "How to obtain", false),
    text("name_ko", "Korean name", false),
    text("name_en", "English name", false),
    text("name_cn", "Chinese name", false),
    text("name_jp", "Japanese name", false),
];

const NEW_RELIC_FIELDS: &[FieldDescriptor] = &[
    text("name", "Relic set name", true),
    image_url("Relic image URL"),
    select("type", "Type", true, &["Relic", "Planar ornament"]),
    text_area("set_2pc_effect", "2-piece effect", true),
    text_area("set_4pc_effect", "4-piece effect (relics only)", false),
    text("acquisition_method", "Where to obtain", false),
    text("name_ko", "Korean name", false),
    text("name_en", "English name", false),
    text("name_cn", "Chinese name", false),
    text("name_jp", "Japanese name", false),
];

// Trailblaze, companion and adventure missions share one shape.
const MISSION_FIELDS: &[FieldDescriptor] = &[
    text("name", "Mission name", true),
    image_url("Mission thumbnail URL"),
    text("chapter_number", "Chapter", false),
    text("subtitle", "Subtitle", false),
    text("unlock_condition", "Unlock condition", false),
    text_area("description", "Description", false),
];

const NEW_COSTUME_FIELDS: &[FieldDescriptor] = &[
    text("name", "Costume name", true),
    image_url("Costume image URL"),
    text("character_name", "Character", true),
    text("acquisition_method", "How to obtain", false),
    text("release_version", "Release version", false),
];

const NEW_EVENT_FIELDS: &[FieldDescriptor] = &[
    text("name", "Event name", true),
    image_url("Event banner URL"),
    select(
        "event_type",
        "Event type",
        true,
        &["Login reward", "Story event", "Web event", "Minigame"],
    ),
    text_area("description", "Description", false),
    text_area("rewards", "Rewards", false),
];

const SUPPORT_EVENT_FIELDS: &[FieldDescriptor] = &[
    text("name", "Support name", true),
    image_url("Banner URL"),
    text("support_type", "Support type", false),
    text_area("description", "Description", false),
    text("duration", "Duration", false),
];

const NEW_CONTENT_FIELDS: &[FieldDescriptor] = &[
    text("name", "Content name", true),
    image_url("Content image URL"),
    select(
        "content_type",
        "Content type",
        false,
        &["System", "Permanent content"],
    ),
    text_area("description", "Description", false),
];

const NEW_ENEMY_FIELDS: &[FieldDescriptor] = &[
    text("name", "Enemy name", true),
    image_url("Enemy image URL"),
    text("nickname", "Alias", false),
    text("affiliation", "Affiliation", false),
    FieldDescriptor {
        name: "element_weakness",
        label: "Elemental weaknesses (comma separated)",
        kind: FieldKind::Text,
        required: false,
        placeholder: Some("Physical, Fire, Lightning"),
    },
    text_area("description", "Description", false),
    number("resistance_physical", "Physical RES (%)", false),
    number("resistance_fire", "Fire RES (%)", false),
    number("resistance_ice", "Ice RES (%)", false),
    number("resistance_lightning", "Lightning RES (%)", false),
    number("resistance_wind", "Wind RES (%)", false),
    number("resistance_quantum", "Quantum RES (%)", false),
    number("resistance_imaginary", "Imaginary RES (%)", false),
];

const NEW_MATERIAL_FIELDS: &[FieldDescriptor] = &[
    text("name", "Material name", true),
    image_url("Material image URL"),
    text("usage", "Used for", false),
    select(
        "rarity",
        "Rarity",
        false,
        &["1-star", "2-star", "3-star", "4-star", "5-star"],
    ),
    text_area("description", "Description", false),
    text("acquisition_method", "How to obtain", false),
    text("used_by_characters", "Used by characters (comma separated)", false),
];

const NOTE_FIELDS: &[FieldDescriptor] = &[
    text("title", "Title", true),
    image_url("Image URL"),
    text_area("description", "Description", false),
];

/// Category of a version announcement item. Serializes to the wire keys the
/// backend stores (`new_character`, `support_event`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    NewField,
    NewPath,
    NewCharacter,
    NewLightcone,
    NewRelic,
    NewTrailblaze,
    NewCompanion,
    NewAdventure,
    NewCostume,
    NewEvent,
    SupportEvent,
    NewContent,
    NewEnemy,
    NewMaterial,
    Convenience,
    Other,
    RerunCharacter,
    RerunLightcone,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 18] = [
        ItemCategory::NewField,
        ItemCategory::NewPath,
        ItemCategory::NewCharacter,
        ItemCategory::NewLightcone,
        ItemCategory::NewRelic,
        ItemCategory::NewTrailblaze,
        ItemCategory::NewCompanion,
        ItemCategory::NewAdventure,
        ItemCategory::NewCostume,
        ItemCategory::NewEvent,
        ItemCategory::SupportEvent,
        ItemCategory::NewContent,
        ItemCategory::NewEnemy,
        ItemCategory::NewMaterial,
        ItemCategory::Convenience,
        ItemCategory::Other,
        ItemCategory::RerunCharacter,
        ItemCategory::RerunLightcone,
    ];

    /// The key this category serializes to.
    pub fn as_key(&self) -> &'static str {
        match self {
            ItemCategory::NewField => "new_field",
            ItemCategory::NewPath => "new_path",
            ItemCategory::NewCharacter => "new_character",
            ItemCategory::NewLightcone => "new_lightcone",
            ItemCategory::NewRelic => "new_relic",
            ItemCategory::NewTrailblaze => "new_trailblaze",
            ItemCategory::NewCompanion => "new_companion",
            ItemCategory::NewAdventure => "new_adventure",
            ItemCategory::NewCostume => "new_costume",
            ItemCategory::NewEvent => "new_event",
            ItemCategory::SupportEvent => "support_event",
            ItemCategory::NewContent => "new_content",
            ItemCategory::NewEnemy => "new_enemy",
            ItemCategory::NewMaterial => "new_material",
            ItemCategory::Convenience => "convenience",
            ItemCategory::Other => "other",
            ItemCategory::RerunCharacter => "rerun_character",
            ItemCategory::RerunLightcone => "rerun_lightcone",
        }
    }

    /// Field schema of this category's item payload.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        match self {
            ItemCategory::NewField => NEW_FIELD_FIELDS,
            ItemCategory::NewPath => NEW_PATH_FIELDS,
            ItemCategory::NewCharacter | ItemCategory::RerunCharacter => NEW_CHARACTER_FIELDS,
            ItemCategory::NewLightcone | ItemCategory::RerunLightcone => NEW_LIGHTCONE_FIELDS,
            ItemCategory::NewRelic => NEW_RELIC_FIELDS,
            ItemCategory::NewTrailblaze | ItemCategory::NewCompanion | ItemCategory::NewAdventure => {
                MISSION_FIELDS
            }
            ItemCategory::NewCostume => NEW_COSTUME_FIELDS,
            ItemCategory::NewEvent => NEW_EVENT_FIELDS,
            ItemCategory::SupportEvent => SUPPORT_EVENT_FIELDS,
            ItemCategory::NewContent => NEW_CONTENT_FIELDS,
            ItemCategory::NewEnemy => NEW_ENEMY_FIELDS,
            ItemCategory::NewMaterial => NEW_MATERIAL_FIELDS,
            ItemCategory::Convenience | ItemCategory::Other => NOTE_FIELDS,
        }
    }

    /// Names of required fields that are missing or blank in `data`.
    pub fn missing_required_fields(&self, data: &Value) -> Vec<&'static str> {
        self.fields()
            .iter()
            .filter(|field| field.required && !has_value(data, field))
            .map(|field| field.name)
            .collect()
    }
}

fn has_value(data: &Value, field: &FieldDescriptor) -> bool {
    match data.get(field.name) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

#[cfg(test)]
#[path = "forms_tests.rs"]
mod tests;
