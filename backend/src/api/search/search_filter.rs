//! Filter expression builder for search index queries.

use common::search_params::LocationSearchParams;

/// Compiles the optional search parameters into one filter expression
/// for the index, clauses joined with `and`. Returns `None` when no
/// parameter produced a clause, so the caller can leave the filter out
/// of the request entirely.
pub fn build_filter_expression(params: &LocationSearchParams) -> Option<String> {
    let mut filters: Vec<String> = Vec::new();

    if !params.categories.is_empty() {
        let category_filters = params
            .categories
            .iter()
            .map(|cat| format!("categories/any(c: c eq {})", format_sql_query::QuotedData(cat)))
            .collect::<Vec<String>>();
        filters.push(format!("({})", category_filters.join(" or ")));
    }

    if let Some(min) = params.price_day_min {
        filters.push(format!("price_movie_day ge {}", min));
    }
    if let Some(max) = params.price_day_max {
        filters.push(format!("price_movie_day le {}", max));
    }

    if let Some(min) = params.price_hour_min {
        filters.push(format!("price_movie_h ge {}", min));
    }
    if let Some(max) = params.price_hour_max {
        filters.push(format!("price_movie_h le {}", max));
    }

    // Facilities combine with AND: every requested flag must be set.
    // Categories and payment methods above/below are OR-groups instead.
    for facility in &params.facilities {
        filters.push(format!("facilities/{} eq true", facility));
    }

    if !params.payment_method.is_empty() {
        let payment_filters = params
            .payment_method
            .iter()
            .map(|method| format!("payment_method eq {}", format_sql_query::QuotedData(method)))
            .collect::<Vec<String>>();
        filters.push(format!("({})", payment_filters.join(" or ")));
    }

    if let Some(payment_due) = &params.payment_due {
        filters.push(format!("payment_due eq {}", format_sql_query::QuotedData(payment_due)));
    }

    if let Some(min) = params.people_min {
        filters.push(format!("max_people ge {}", min));
    }
    if let Some(max) = params.people_max {
        filters.push(format!("max_people le {}", max));
    }

    if let Some(min) = params.time_min {
        filters.push(format!("available_hours ge {}", min));
    }
    if let Some(max) = params.time_max {
        filters.push(format!("available_hours le {}", max));
    }

    if let Some(min) = params.area_min {
        filters.push(format!("area_sqm ge {}", min));
    }
    if let Some(max) = params.area_max {
        filters.push(format!("area_sqm le {}", max));
    }

    if let Some(min) = params.ceiling_min {
        filters.push(format!("ceiling_height ge {}", min));
    }
    if let Some(max) = params.ceiling_max {
        filters.push(format!("ceiling_height le {}", max));
    }

    if filters.is_empty() {
        None
    } else {
        Some(filters.join(" and "))
    }
}

/// Combined full-text query. The keyword falls back to the match-all
/// wildcard; an area keyword is appended after a space.
pub fn combined_search_text(params: &LocationSearchParams) -> String {
    let keyword = params.keyword.as_deref().unwrap_or("*");
    match params.area_keyword.as_deref() {
        Some(area_keyword) => format!("{} {}", keyword, area_keyword),
        None => keyword.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_produce_no_filter() {
        let params = LocationSearchParams::default();
        assert_eq!(build_filter_expression(&params), None);
        assert_eq!(combined_search_text(&params), "*");
    }

    #[test]
    fn category_and_day_price_example() {
        let params = LocationSearchParams {
            categories: vec!["Studio".to_string()],
            price_day_min: Some(10000),
            price_day_max: Some(50000),
            ..Default::default()
        };
        assert_eq!(
            build_filter_expression(&params).unwrap(),
            "(categories/any(c: c eq 'Studio')) and price_movie_day ge 10000 and price_movie_day le 50000",
        );
    }

    #[test]
    fn categories_form_one_or_group_in_input_order() {
        let params = LocationSearchParams {
            categories: vec!["House".to_string(), "Studio".to_string(), "Cafe".to_string()],
            ..Default::default()
        };
        assert_eq!(
            build_filter_expression(&params).unwrap(),
            "(categories/any(c: c eq 'House') or categories/any(c: c eq 'Studio') or categories/any(c: c eq 'Cafe'))",
        );
    }

    #[test]
    fn facilities_are_anded_not_ored() {
        let params = LocationSearchParams {
            facilities: vec!["has_parking".to_string(), "kitchen".to_string()],
            ..Default::default()
        };
        assert_eq!(
            build_filter_expression(&params).unwrap(),
            "facilities/has_parking eq true and facilities/kitchen eq true",
        );
    }

    #[test]
    fn payment_methods_form_an_or_group() {
        let params = LocationSearchParams {
            payment_method: vec!["card".to_string(), "invoice".to_string()],
            payment_due: Some("month_end".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_filter_expression(&params).unwrap(),
            "(payment_method eq 'card' or payment_method eq 'invoice') and payment_due eq 'month_end'",
        );
    }

    #[test]
    fn min_only_produces_single_clause() {
        let params = LocationSearchParams {
            price_hour_min: Some(3000),
            ..Default::default()
        };
        assert_eq!(build_filter_expression(&params).unwrap(), "price_movie_h ge 3000");
    }

    #[test]
    fn max_only_produces_single_clause() {
        let params = LocationSearchParams {
            people_max: Some(20),
            ..Default::default()
        };
        assert_eq!(build_filter_expression(&params).unwrap(), "max_people le 20");
    }

    #[test]
    fn both_bounds_produce_two_clauses() {
        let params = LocationSearchParams {
            time_min: Some(4),
            time_max: Some(12),
            ..Default::default()
        };
        assert_eq!(
            build_filter_expression(&params).unwrap(),
            "available_hours ge 4 and available_hours le 12",
        );
    }

    #[test]
    fn float_ranges_use_index_fields() {
        let params = LocationSearchParams {
            area_min: Some(30.5),
            ceiling_max: Some(4.2),
            ..Default::default()
        };
        assert_eq!(
            build_filter_expression(&params).unwrap(),
            "area_sqm ge 30.5 and ceiling_height le 4.2",
        );
    }

    #[test]
    fn every_range_field_contributes_when_set() {
        let params = LocationSearchParams {
            price_day_min: Some(1),
            price_day_max: Some(2),
            price_hour_min: Some(3),
            price_hour_max: Some(4),
            people_min: Some(5),
            people_max: Some(6),
            time_min: Some(7),
            time_max: Some(8),
            area_min: Some(9.0),
            area_max: Some(10.0),
            ceiling_min: Some(11.0),
            ceiling_max: Some(12.0),
            ..Default::default()
        };
        let filter = build_filter_expression(&params).unwrap();
        assert_eq!(filter.matches(" and ").count(), 11);
        for field in [
            "price_movie_day",
            "price_movie_h",
            "max_people",
            "available_hours",
            "area_sqm",
            "ceiling_height",
        ] {
            assert!(filter.contains(&format!("{} ge ", field)), "missing ge clause: {}", field);
            assert!(filter.contains(&format!("{} le ", field)), "missing le clause: {}", field);
        }
    }

    #[test]
    fn string_values_are_quote_escaped() {
        let params = LocationSearchParams {
            categories: vec!["O'Brien's Loft".to_string()],
            ..Default::default()
        };
        assert_eq!(
            build_filter_expression(&params).unwrap(),
            "(categories/any(c: c eq 'O''Brien''s Loft'))",
        );
    }

    #[test]
    fn area_keyword_is_appended_to_keyword() {
        let params = LocationSearchParams {
            keyword: Some("riverside".to_string()),
            area_keyword: Some("Shibuya".to_string()),
            ..Default::default()
        };
        assert_eq!(combined_search_text(&params), "riverside Shibuya");
    }

    #[test]
    fn area_keyword_combines_with_default_wildcard() {
        let params = LocationSearchParams {
            area_keyword: Some("Shibuya".to_string()),
            ..Default::default()
        };
        assert_eq!(combined_search_text(&params), "* Shibuya");
    }
}
