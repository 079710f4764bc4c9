// Copyright (c) Emodak Team
// SPDX-License-Identifier: Apache-2.0

use diesel::table;

// Define users table, one row per wallet address
table! {
    users (wallet_address) {
        wallet_address -> Varchar,
        display_name -> Varchar,
        status -> Varchar,
        bio -> Text,
        avatar_url -> Text,
        hero_image_url -> Text,
        music_url -> Text,
        interests -> Text,
        last_updated -> Timestamp,
    }
}
