use statuspage_extras::application::error::ApplicationError;
use statuspage_extras::application::queries::content_types::{
    GetContentTypeQuery, ListContentTypesQuery,
};
use statuspage_extras::domain::content_type::TypeFilter;

mod support;
use support::build_services;

async fn list_keys(filter: TypeFilter) -> Vec<String> {
    build_services()
        .content_type_queries
        .list_content_types(ListContentTypesQuery { filter })
        .await
        .expect("listing should succeed")
        .items
        .into_iter()
        .map(|item| format!("{}.{}", item.app_label, item.model))
        .collect()
}

#[tokio::test]
async fn listing_is_ordered_by_natural_key() {
    assert_eq!(
        list_keys(TypeFilter::default()).await,
        vec![
            "auth.user",
            "components.component",
            "components.componentgroup",
            "incidents.incident",
            "incidents.incidentupdate",
        ]
    );
}

#[tokio::test]
async fn search_spans_app_label_and_model() {
    let filter = TypeFilter {
        q: Some("Update".into()),
        ..Default::default()
    };
    assert_eq!(list_keys(filter).await, vec!["incidents.incidentupdate"]);

    let filter = TypeFilter {
        q: Some("AUTH".into()),
        ..Default::default()
    };
    assert_eq!(list_keys(filter).await, vec!["auth.user"]);
}

#[tokio::test]
async fn exact_fields_and_search_combine() {
    let filter = TypeFilter {
        app_labels: vec!["components".into()],
        q: Some("component".into()),
        ..Default::default()
    };
    assert_eq!(
        list_keys(filter).await,
        vec!["components.component", "components.componentgroup"]
    );

    let filter = TypeFilter {
        ids: vec![11, 12],
        models: vec!["incident".into()],
        ..Default::default()
    };
    assert_eq!(list_keys(filter).await, vec!["incidents.incident"]);
}

#[tokio::test]
async fn get_content_type_by_id() {
    let services = build_services();
    let found = services
        .content_type_queries
        .get_content_type(GetContentTypeQuery { id: 13 })
        .await
        .unwrap();
    assert_eq!(found.model, "componentgroup");

    let missing = services
        .content_type_queries
        .get_content_type(GetContentTypeQuery { id: 999 })
        .await;
    assert!(matches!(missing, Err(ApplicationError::NotFound(_))));
}
