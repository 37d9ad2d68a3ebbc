//! Name lookups for rows that reference workers or clients.
//!
//! Listing endpoints fetch their rows first and then resolve the referenced names with one
//! `IN` query per table.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr};
use uuid::Uuid;

use crate::server::data::{client::ClientRepository, user::UserRepository};

fn unique(ids: impl IntoIterator<Item = Uuid>) -> Vec<Uuid> {
    let mut ids: Vec<Uuid> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Full names of the given users keyed by ID
pub async fn user_names<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<HashMap<Uuid, String>, DbErr> {
    let users = UserRepository::new(db).find_by_ids(unique(ids)).await?;

    Ok(users.into_iter().map(|u| (u.id, u.full_name)).collect())
}

/// Full names of the given clients keyed by ID
pub async fn client_names<C: ConnectionTrait>(
    db: &C,
    ids: impl IntoIterator<Item = Uuid>,
) -> Result<HashMap<Uuid, String>, DbErr> {
    let clients = ClientRepository::new(db).find_by_ids(unique(ids)).await?;

    Ok(clients.into_iter().map(|c| (c.id, c.full_name)).collect())
}
