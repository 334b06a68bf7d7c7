//! Shared CRUD calls for the resources that follow the backend's standard
//! controller layout:
//!
//! | Call | Method | Path |
//! |------|--------|------|
//! | [`list`] | GET | `{base}/list?page&size&...filter` |
//! | [`get`] | GET | `{base}/{id}` |
//! | [`create`] | POST | `{base}` |
//! | [`update`] | PUT | `{base}/{id}` |
//! | [`delete`] | DELETE | `{base}/{id}` |
//! | [`batch_delete`] | DELETE | `{base}/batch` with the ids as body |
//! | [`update_status`] | PUT | `{base}/{id}/status?status=` |

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::{ApiClient, ApiRequest};
use crate::envelope::{Page, PageQuery};
use crate::error::ApiError;
use crate::models::Id;
use crate::transport::Transport;

/// A backend collection with the standard controller layout.
pub trait Resource {
    /// Path under the API base, e.g. `/basic/class`.
    const BASE: &'static str;
    type Record: Serialize + DeserializeOwned;
    /// Extra `/list` parameters; `None` fields are left out.
    type Filter: Serialize + Default;
}

pub(crate) fn item_path<R: Resource>(id: Id) -> String {
    format!("{}/{}", R::BASE, id)
}

pub async fn list<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    page: &PageQuery,
    filter: &R::Filter,
) -> Result<Page<R::Record>, ApiError> {
    let request = ApiRequest::get(format!("{}/list", R::BASE))
        .query(&page.clone().normalized())?
        .query(filter)?;
    client.fetch(request).await
}

pub async fn get<R: Resource, T: Transport>(client: &ApiClient<T>, id: Id) -> Result<R::Record, ApiError> {
    client.fetch(ApiRequest::get(item_path::<R>(id))).await
}

pub async fn create<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    record: &R::Record,
) -> Result<R::Record, ApiError> {
    client.fetch(ApiRequest::post(R::BASE).json(record)?).await
}

pub async fn update<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    id: Id,
    record: &R::Record,
) -> Result<R::Record, ApiError> {
    client.fetch(ApiRequest::put(item_path::<R>(id)).json(record)?).await
}

pub async fn delete<R: Resource, T: Transport>(client: &ApiClient<T>, id: Id) -> Result<(), ApiError> {
    client.execute(ApiRequest::delete(item_path::<R>(id))).await
}

pub async fn batch_delete<R: Resource, T: Transport>(client: &ApiClient<T>, ids: &[Id]) -> Result<(), ApiError> {
    if ids.is_empty() {
        return Err(ApiError::InvalidRequest("no records selected".into()));
    }
    client
        .execute(ApiRequest::delete(format!("{}/batch", R::BASE)).json(ids)?)
        .await
}

pub async fn update_status<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    id: Id,
    status: i32,
) -> Result<(), ApiError> {
    let request = ApiRequest::put(format!("{}/status", item_path::<R>(id))).param("status", status);
    client.execute(request).await
}

/// GET a plain list from a path under the resource, e.g. `/all`.
pub(crate) async fn list_at<R: Resource, T: Transport>(
    client: &ApiClient<T>,
    suffix: &str,
) -> Result<Vec<R::Record>, ApiError> {
    client.fetch(ApiRequest::get(format!("{}{}", R::BASE, suffix))).await
}

/// Generate the standard per-resource wrappers (`list`, `get`, `create`,
/// `update`, `delete`, `batch_delete`, `update_status`) for a [`Resource`].
macro_rules! crud_endpoints {
    ($resource:ty, $record:ty, $filter:ty) => {
        $crate::endpoints::crud::crud_endpoints!($resource, $record, $filter, $crate::models::RecordStatus);
    };
    ($resource:ty, $record:ty, $filter:ty, $status:ty) => {
        pub async fn list<T: $crate::transport::Transport>(
            client: &$crate::client::ApiClient<T>,
            page: &$crate::envelope::PageQuery,
            filter: &$filter,
        ) -> Result<$crate::envelope::Page<$record>, $crate::error::ApiError> {
            $crate::endpoints::crud::list::<$resource, T>(client, page, filter).await
        }

        pub async fn get<T: $crate::transport::Transport>(
            client: &$crate::client::ApiClient<T>,
            id: $crate::models::Id,
        ) -> Result<$record, $crate::error::ApiError> {
            $crate::endpoints::crud::get::<$resource, T>(client, id).await
        }

        pub async fn create<T: $crate::transport::Transport>(
            client: &$crate::client::ApiClient<T>,
            record: &$record,
        ) -> Result<$record, $crate::error::ApiError> {
            $crate::endpoints::crud::create::<$resource, T>(client, record).await
        }

        pub async fn update<T: $crate::transport::Transport>(
            client: &$crate::client::ApiClient<T>,
            id: $crate::models::Id,
            record: &$record,
        ) -> Result<$record, $crate::error::ApiError> {
            $crate::endpoints::crud::update::<$resource, T>(client, id, record).await
        }

        pub async fn delete<T: $crate::transport::Transport>(
            client: &$crate::client::ApiClient<T>,
            id: $crate::models::Id,
        ) -> Result<(), $crate::error::ApiError> {
            $crate::endpoints::crud::delete::<$resource, T>(client, id).await
        }

        pub async fn batch_delete<T: $crate::transport::Transport>(
            client: &$crate::client::ApiClient<T>,
            ids: &[$crate::models::Id],
        ) -> Result<(), $crate::error::ApiError> {
            $crate::endpoints::crud::batch_delete::<$resource, T>(client, ids).await
        }

        pub async fn update_status<T: $crate::transport::Transport>(
            client: &$crate::client::ApiClient<T>,
            id: $crate::models::Id,
            status: $status,
        ) -> Result<(), $crate::error::ApiError> {
            $crate::endpoints::crud::update_status::<$resource, T>(client, id, i32::from(status)).await
        }
    };
}

pub(crate) use crud_endpoints;
