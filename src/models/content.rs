// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response shapes for news, store, PVE and service status endpoints.
//!
//! These payloads are not contractually stable, so every field defaults
//! when missing or `null` and unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::serde_util::null_as_default;

// ─── Service status ──────────────────────────────────────────────────────────

/// One entry of the lightswitch bulk status response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceStatusEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

/// Whether Fortnite is up, and the published reason if not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub up: bool,
    pub message: String,
}

impl ServiceStatus {
    /// Message used when the status endpoint returns an empty list.
    pub const NO_DATA: &'static str = "No data returned from status endpoint";

    /// Interpret the first entry of the bulk status response.
    pub fn from_entries(entries: &[ServiceStatusEntry]) -> Self {
        match entries.first() {
            Some(entry) if entry.status == "UP" => Self {
                up: true,
                message: String::new(),
            },
            Some(entry) => Self {
                up: false,
                message: entry.message.clone(),
            },
            None => Self {
                up: false,
                message: Self::NO_DATA.to_string(),
            },
        }
    }
}

// ─── News ────────────────────────────────────────────────────────────────────

/// A single news card.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsMessage {
    pub image: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub hidden: bool,
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Featured message plus the rotating list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsSection {
    #[serde(rename = "_type")]
    pub kind: Option<String>,
    pub message: Option<NewsMessage>,
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<NewsMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideableNews {
    #[serde(deserialize_with = "null_as_default")]
    pub overrideablemessage: NewsSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeNews {
    #[serde(deserialize_with = "null_as_default")]
    pub news: NewsSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginNews {
    #[serde(deserialize_with = "null_as_default")]
    pub loginmessage: NewsSection,
}

/// News for survival, Save the World, Battle Royale and the login screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsBundle {
    #[serde(deserialize_with = "null_as_default")]
    pub survivalmessage: OverrideableNews,
    #[serde(deserialize_with = "null_as_default")]
    pub athenamessage: OverrideableNews,
    #[serde(deserialize_with = "null_as_default")]
    pub savetheworldnews: ModeNews,
    #[serde(deserialize_with = "null_as_default")]
    pub battleroyalenews: ModeNews,
    #[serde(deserialize_with = "null_as_default")]
    pub loginmessage: LoginNews,
}

impl NewsBundle {
    /// Visible Battle Royale news cards.
    pub fn battle_royale_messages(&self) -> impl Iterator<Item = &NewsMessage> {
        self.battleroyalenews
            .news
            .messages
            .iter()
            .filter(|m| !m.hidden)
    }
}

// ─── Store ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    #[serde(deserialize_with = "null_as_default")]
    pub currency_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_sub_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub regular_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub final_price: i64,
    pub sale_expiration: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub base_price: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GiftInfo {
    #[serde(rename = "bIsEnabled", deserialize_with = "null_as_default")]
    pub is_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub forced_gift_box_template_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_requirements: Vec<serde_json::Value>,
}

/// An item offered in a storefront.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub offer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dev_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub offer_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub prices: Vec<Price>,
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub daily_limit: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub weekly_limit: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub monthly_limit: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub app_store_id: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub requirements: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub meta_info: Vec<MetaInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub catalog_group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub catalog_group_priority: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sort_priority: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_asset_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item_grants: Vec<serde_json::Value>,
    pub gift_info: Option<GiftInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Storefront {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub catalog_entries: Vec<CatalogEntry>,
}

/// Items currently for sale, grouped by storefront.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreCatalog {
    #[serde(deserialize_with = "null_as_default")]
    pub refresh_interval_hrs: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub daily_purchase_hrs: i64,
    pub expiration: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub storefronts: Vec<Storefront>,
}

impl StoreCatalog {
    pub fn storefront(&self, name: &str) -> Option<&Storefront> {
        self.storefronts.iter().find(|s| s.name == name)
    }
}

// ─── PVE (Save the World) ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataTableRow {
    #[serde(deserialize_with = "null_as_default")]
    pub data_table: String,
    #[serde(deserialize_with = "null_as_default")]
    pub row_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RewardItem {
    #[serde(deserialize_with = "null_as_default")]
    pub item_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RewardTier {
    #[serde(deserialize_with = "null_as_default")]
    pub tier_group_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<RewardItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PowerRequirements {
    #[serde(deserialize_with = "null_as_default")]
    pub commander_level: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub personal_power_rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_personal_power_rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub party_power_rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_party_power_rating: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub active_quest_definition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quest_definition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub objective_stat_handle: DataTableRow,
    #[serde(deserialize_with = "null_as_default")]
    pub uncompleted_quest_definition: String,
    #[serde(deserialize_with = "null_as_default")]
    pub item_definition: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TheaterRuntimeInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub theater_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub theater_visibility_requirements: PowerRequirements,
    #[serde(deserialize_with = "null_as_default")]
    pub requirements: PowerRequirements,
    #[serde(deserialize_with = "null_as_default")]
    pub required_sub_game_for_visibility: String,
    #[serde(deserialize_with = "null_as_default")]
    pub world_map_pin_class: String,
    #[serde(deserialize_with = "null_as_default")]
    pub theater_image: String,
    /// Brush definitions per size; kept as raw JSON.
    pub theater_images: serde_json::Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TheaterRegion {
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unique_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tile_indices: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub region_theme_icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub requirements: PowerRequirements,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theater {
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unique_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub theater_slot: i64,
    #[serde(rename = "bIsTestTheater", deserialize_with = "null_as_default")]
    pub is_test_theater: bool,
    #[serde(rename = "bHideLikeTestTheater", deserialize_with = "null_as_default")]
    pub hide_like_test_theater: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub required_event_flag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mission_reward_named_weights_row_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub runtime_info: TheaterRuntimeInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub regions: Vec<TheaterRegion>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mission {
    #[serde(deserialize_with = "null_as_default")]
    pub mission_guid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mission_rewards: RewardTier,
    pub bonus_mission_rewards: Option<RewardTier>,
    #[serde(deserialize_with = "null_as_default")]
    pub mission_generator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mission_difficulty_info: DataTableRow,
    #[serde(deserialize_with = "null_as_default")]
    pub tile_index: i64,
    pub available_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TheaterMissions {
    #[serde(deserialize_with = "null_as_default")]
    pub theater_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub available_missions: Vec<Mission>,
    pub next_refresh: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MissionAlert {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spread_data_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mission_alert_guid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tile_index: i64,
    pub available_until: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_spread_refreshes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub mission_alert_rewards: RewardTier,
    #[serde(deserialize_with = "null_as_default")]
    pub mission_alert_modifiers: RewardTier,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TheaterMissionAlerts {
    #[serde(deserialize_with = "null_as_default")]
    pub theater_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub available_mission_alerts: Vec<MissionAlert>,
    pub next_refresh: Option<DateTime<Utc>>,
}

/// Save the World world info: theaters, missions and mission alerts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PveInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub theaters: Vec<Theater>,
    #[serde(deserialize_with = "null_as_default")]
    pub missions: Vec<TheaterMissions>,
    #[serde(deserialize_with = "null_as_default")]
    pub mission_alerts: Vec<TheaterMissionAlerts>,
}
