//! Search execution and result shaping.

use common::search_params::LocationSearchParams;
use common::search_result::{FacetBucket, LocationSearchResults};

use crate::api::search::search_filter::{build_filter_expression, combined_search_text};
use crate::db_utils::azure_search_utils::{RawSearchRequest, SearchIndexClient};

const FACET_FIELDS: &[&str] = &["categories"];
const QUERY_TYPE: &str = "semantic";
const SEMANTIC_CONFIGURATION_NAME: &str = "default";

pub async fn search_locations(
    client: &SearchIndexClient,
    params: &LocationSearchParams,
) -> anyhow::Result<LocationSearchResults> {
    let request = build_search_request(params);
    let response = client.search(&request).await?;

    let facets = response
        .facets
        .unwrap_or_default()
        .into_iter()
        .map(|(field, buckets)| {
            let buckets = buckets
                .into_iter()
                .map(|bucket| FacetBucket {
                    value: bucket.value,
                    count: bucket.count,
                })
                .collect::<Vec<FacetBucket>>();
            (field, buckets)
        })
        .collect();

    // Documents pass through as returned by the index, relevance order
    // included. No paging or dedup happens here.
    Ok(LocationSearchResults {
        results: response.value,
        facets,
    })
}

fn build_search_request(params: &LocationSearchParams) -> RawSearchRequest {
    RawSearchRequest {
        search: combined_search_text(params),
        filter: build_filter_expression(params),
        facets: FACET_FIELDS.iter().map(|field| field.to_string()).collect(),
        query_type: QUERY_TYPE.to_string(),
        semantic_configuration: SEMANTIC_CONFIGURATION_NAME.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchIndexConfig;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn default_params_request_match_all_without_filter() {
        let request = build_search_request(&LocationSearchParams::default());
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["search"], "*");
        assert!(body.get("filter").is_none());
        assert_eq!(body["facets"], serde_json::json!(["categories"]));
        assert_eq!(body["queryType"], "semantic");
        assert_eq!(body["semanticConfiguration"], "default");
    }

    #[test]
    fn filtered_params_request_carries_expression() {
        let params = LocationSearchParams {
            keyword: Some("loft".to_string()),
            categories: vec!["Studio".to_string()],
            ..Default::default()
        };
        let body = serde_json::to_value(&build_search_request(&params)).unwrap();
        assert_eq!(body["search"], "loft");
        assert_eq!(body["filter"], "(categories/any(c: c eq 'Studio'))");
    }

    #[tokio::test]
    async fn normalizes_documents_and_facets() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/indexes/locations-index/docs/search"))
            .and(body_partial_json(serde_json::json!({"search": "* Shibuya"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "@search.facets": {
                    "categories": [{"value": "Studio", "count": 2}],
                },
                "value": [
                    {"id": "7", "name": "Studio C", "@search.score": 2.25},
                ],
            })))
            .mount(&server)
            .await;

        let client = SearchIndexClient::new(SearchIndexConfig {
            endpoint: server.uri(),
            admin_key: "test-key".to_string(),
            index_name: "locations-index".to_string(),
        });
        let params = LocationSearchParams {
            area_keyword: Some("Shibuya".to_string()),
            ..Default::default()
        };
        let results = search_locations(&client, &params).await.unwrap();

        assert_eq!(results.results.len(), 1);
        assert_eq!(results.results[0]["name"], "Studio C");
        assert_eq!(results.facets["categories"].len(), 1);
        assert_eq!(results.facets["categories"][0].value, "Studio");
        assert_eq!(results.facets["categories"][0].count, 2);
    }

    #[tokio::test]
    async fn missing_facets_normalize_to_empty_map() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": []})),
            )
            .mount(&server)
            .await;

        let client = SearchIndexClient::new(SearchIndexConfig {
            endpoint: server.uri(),
            admin_key: "test-key".to_string(),
            index_name: "locations-index".to_string(),
        });
        let results = search_locations(&client, &LocationSearchParams::default())
            .await
            .unwrap();
        assert!(results.results.is_empty());
        assert!(results.facets.is_empty());
    }
}
