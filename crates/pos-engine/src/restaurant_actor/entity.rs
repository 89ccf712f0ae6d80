//! Entity trait implementation for the Restaurant domain type.
//!
//! Signup is a chain of single-key steps run from [`ActorEntity::on_create`]: claim the
//! email index entry, provision the tables, then persist the restaurant itself. A taken
//! email stops the chain before anything is written.

use crate::clients::{EmailIndexClient, TableClient};
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, TableNumber};
use crate::restaurant_actor::{RestaurantAction, RestaurantError};
use async_trait::async_trait;
use ledger_actor::ActorEntity;
use std::convert::Infallible;

/// Dependencies of the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantContext {
    pub email_index: EmailIndexClient,
    pub tables: TableClient,
    pub table_count: TableNumber,
}

#[async_trait]
impl ActorEntity for Restaurant {
    const KIND: &'static str = "restaurant";
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = Infallible;
    type Action = RestaurantAction;
    type ActionResult = ();
    type Context = RestaurantContext;
    type Error = RestaurantError;

    fn id(&self) -> RestaurantId {
        self.id.clone()
    }

    fn from_create_params(params: RestaurantCreate) -> Result<Self, RestaurantError> {
        for (field, value) in [
            ("email", &params.email),
            ("password", &params.password),
            ("name", &params.name),
        ] {
            if value.trim().is_empty() {
                return Err(RestaurantError::ValidationError(format!("{field} is required")));
            }
        }

        Ok(Self {
            id: RestaurantId::mint(),
            email: params.email,
            password: params.password,
            name: params.name,
            paid: true,
            manager_password: String::new(),
        })
    }

    async fn on_create(&mut self, ctx: &RestaurantContext) -> Result<(), RestaurantError> {
        ctx.email_index.claim(&self.email, &self.id).await?;
        ctx.tables
            .provision(&self.id, ctx.table_count)
            .await
            .map_err(|e| RestaurantError::ActorCommunicationError(e.to_string()))?;
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &RestaurantContext,
    ) -> Result<(), RestaurantError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &RestaurantContext,
    ) -> Result<(), RestaurantError> {
        match action {
            RestaurantAction::SetManagerPassword(password) => {
                self.manager_password = password;
                Ok(())
            }
            RestaurantAction::VerifyManagerPassword(password) => {
                if self.manager_password == password {
                    Ok(())
                } else {
                    Err(RestaurantError::Unauthorized)
                }
            }
        }
    }
}
