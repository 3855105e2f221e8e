//! Item Commands
//!
//! `ScopeBackend` over HTTP for sections, subsections and checklists.

use std::marker::PhantomData;

use async_trait::async_trait;
use reorder_core::{BackendError, FieldPatch, NewItem, OrderEntry, Orderable, ScopeBackend, ScopeKey};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{api_base, segment, send};
use crate::models::{Checklist, Named, Section, Subsection};

/// One kind of orderable item and where its routes live
pub trait Resource: Copy + Send + Sync + 'static {
    type Item: Orderable + Named + Clone + PartialEq + DeserializeOwned + Send + Sync + 'static;

    /// Collection segment of the parent scope (`/api/{PARENT}/{scope}/{PLURAL}`)
    const PARENT: &'static str;
    const PLURAL: &'static str;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SectionsApi;

#[derive(Clone, Copy, Debug, Default)]
pub struct SubsectionsApi;

#[derive(Clone, Copy, Debug, Default)]
pub struct ChecklistsApi;

impl Resource for SectionsApi {
    type Item = Section;
    const PARENT: &'static str = "companies";
    const PLURAL: &'static str = "sections";
}

impl Resource for SubsectionsApi {
    type Item = Subsection;
    const PARENT: &'static str = "sections";
    const PLURAL: &'static str = "subsections";
}

impl Resource for ChecklistsApi {
    type Item = Checklist;
    const PARENT: &'static str = "subsections";
    const PLURAL: &'static str = "checklists";
}

#[derive(Serialize)]
struct ReorderBody<'a> {
    entries: &'a [OrderEntry],
}

#[derive(Deserialize)]
struct Ack {
    #[allow(dead_code)]
    ok: bool,
}

/// Browser-side persistence collaborator for one item kind
pub struct HttpBackend<R> {
    client: reqwest::Client,
    _resource: PhantomData<R>,
}

impl<R: Resource> HttpBackend<R> {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            _resource: PhantomData,
        }
    }

    fn collection_url(scope: &ScopeKey, suffix: &str) -> String {
        format!("{}/{}/{}/{}{}", api_base(), R::PARENT, segment(scope.id()), R::PLURAL, suffix)
    }

    fn item_url(item_id: &str, suffix: &str) -> String {
        format!("{}/{}/{}{}", api_base(), R::PLURAL, segment(item_id), suffix)
    }
}

#[async_trait(?Send)]
impl<R: Resource> ScopeBackend for HttpBackend<R> {
    type Item = R::Item;

    async fn reorder_items(&self, scope: &ScopeKey, entries: &[OrderEntry]) -> Result<(), BackendError> {
        let request = self
            .client
            .post(Self::collection_url(scope, "/reorder"))
            .json(&ReorderBody { entries });
        send::<Ack>(request).await.map(|_| ())
    }

    async fn update_item_fields(&self, item_id: &str, patch: &FieldPatch) -> Result<R::Item, BackendError> {
        send(self.client.patch(Self::item_url(item_id, "")).json(patch)).await
    }

    async fn create_item(&self, scope: &ScopeKey, fields: &NewItem) -> Result<R::Item, BackendError> {
        send(self.client.post(Self::collection_url(scope, "")).json(fields)).await
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), BackendError> {
        send::<Ack>(self.client.delete(Self::item_url(item_id, ""))).await.map(|_| ())
    }

    async fn restore_item(&self, item_id: &str) -> Result<(), BackendError> {
        send::<R::Item>(self.client.post(Self::item_url(item_id, "/restore")))
            .await
            .map(|_| ())
    }

    async fn list_items(&self, scope: &ScopeKey) -> Result<Vec<R::Item>, BackendError> {
        send(self.client.get(Self::collection_url(scope, ""))).await
    }

    async fn list_deleted_items(&self, scope: &ScopeKey) -> Result<Vec<R::Item>, BackendError> {
        send(self.client.get(Self::collection_url(scope, "/deleted"))).await
    }
}

// ========================
// Commands
// ========================

pub async fn list_items<R: Resource>(scope: &ScopeKey) -> Result<Vec<R::Item>, String> {
    HttpBackend::<R>::new().list_items(scope).await.map_err(|e| e.to_string())
}

pub async fn list_deleted_items<R: Resource>(scope: &ScopeKey) -> Result<Vec<R::Item>, String> {
    HttpBackend::<R>::new()
        .list_deleted_items(scope)
        .await
        .map_err(|e| e.to_string())
}

pub async fn create_item<R: Resource>(scope: &ScopeKey, fields: &NewItem) -> Result<R::Item, String> {
    HttpBackend::<R>::new()
        .create_item(scope, fields)
        .await
        .map_err(|e| e.to_string())
}

pub async fn update_item<R: Resource>(item_id: &str, patch: &FieldPatch) -> Result<R::Item, String> {
    HttpBackend::<R>::new()
        .update_item_fields(item_id, patch)
        .await
        .map_err(|e| e.to_string())
}

pub async fn delete_item<R: Resource>(item_id: &str) -> Result<(), String> {
    HttpBackend::<R>::new().delete_item(item_id).await.map_err(|e| e.to_string())
}

pub async fn restore_item<R: Resource>(item_id: &str) -> Result<(), String> {
    HttpBackend::<R>::new().restore_item(item_id).await.map_err(|e| e.to_string())
}
