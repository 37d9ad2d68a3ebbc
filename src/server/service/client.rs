//! Client management for admins.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::care::{ClientDto, ClientFormDto},
    server::{
        data::client::ClientRepository,
        error::{form::FormError, record::RecordError, Error},
        util::{form::all_present, search::SearchTerm},
    },
};

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    /// Creates a new instance of [`ClientService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Clients newest first, filtered by name or email when `search` is given.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<ClientDto>, Error> {
        let term = SearchTerm::new(search);
        let clients = ClientRepository::new(self.db).list().await?;

        Ok(clients
            .into_iter()
            .filter(|c| term.matches([Some(c.full_name.as_str()), c.email.as_deref()]))
            .map(ClientDto::from)
            .collect())
    }

    /// Active clients ordered by name, for the shift and invoice forms.
    pub async fn list_active(&self) -> Result<Vec<ClientDto>, Error> {
        let clients = ClientRepository::new(self.db).list_active().await?;

        Ok(clients.into_iter().map(ClientDto::from).collect())
    }

    pub async fn create(&self, form: &ClientFormDto) -> Result<ClientDto, Error> {
        validate(form)?;

        let client = ClientRepository::new(self.db).create(form).await?;

        Ok(client.into())
    }

    pub async fn update(&self, client_id: Uuid, form: &ClientFormDto) -> Result<ClientDto, Error> {
        validate(form)?;

        ClientRepository::new(self.db)
            .update(client_id, form)
            .await?
            .map(ClientDto::from)
            .ok_or_else(|| not_found(client_id))
    }

    /// Set a client's active flag with one update, then return the refetched client list.
    pub async fn set_active(&self, client_id: Uuid, is_active: bool) -> Result<Vec<ClientDto>, Error> {
        let updated = ClientRepository::new(self.db)
            .set_active(client_id, is_active)
            .await?;

        if updated == 0 {
            return Err(not_found(client_id));
        }

        self.list(None).await
    }
}

fn validate(form: &ClientFormDto) -> Result<(), FormError> {
    if !all_present(&[&form.full_name]) {
        return Err(FormError::MissingFields("Full name is required."));
    }

    Ok(())
}

fn not_found(client_id: Uuid) -> Error {
    RecordError::NotFound {
        table: "Client",
        id: client_id,
    }
    .into()
}
