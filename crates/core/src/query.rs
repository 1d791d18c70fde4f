//! Query parameters for the report listing endpoint.

/// Filtering flavor understood by the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    Field,
    FieldPrefix,
    FieldSearch,
    Special,
}

impl FilterType {
    pub fn as_token(self) -> &'static str {
        match self {
            FilterType::Field => "field",
            FilterType::FieldPrefix => "field-prefix",
            FilterType::FieldSearch => "field-search",
            FilterType::Special => "special",
        }
    }
}

/// Field a report filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Filename,
}

impl SearchField {
    pub fn as_token(self) -> &'static str {
        match self {
            SearchField::Filename => "filename",
        }
    }
}

/// Field the listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Filename,
    CreatedAt,
}

impl OrderField {
    pub fn as_token(self) -> &'static str {
        match self {
            OrderField::Filename => "filename",
            OrderField::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_token(self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Filter {
    pub filter_type: FilterType,
    pub field: SearchField,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub field: OrderField,
    pub direction: OrderDirection,
}

/// Search parameters for `GET /report`. Unset parts emit no query
/// parameters at all.
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub filter: Option<Filter>,
    pub order: Option<Order>,
}

impl ReportQuery {
    /// Flatten into key/value pairs in the order the remote service
    /// documents them: paging, filter, ordering.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("page_size", page_size.to_string()));
        }
        if let Some(filter) = &self.filter {
            params.push(("filter_type", filter.filter_type.as_token().to_string()));
            params.push(("filter_field", filter.field.as_token().to_string()));
            params.push(("filter_value", filter.value.clone()));
        }
        if let Some(order) = &self.order {
            params.push(("order_field", order.field.as_token().to_string()));
            params.push(("order_direction", order.direction.as_token().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_emits_nothing() {
        assert!(ReportQuery::default().params().is_empty());
    }

    #[test]
    fn full_query_emits_documented_tokens() {
        let query = ReportQuery {
            page: Some(2),
            page_size: Some(25),
            filter: Some(Filter {
                filter_type: FilterType::FieldPrefix,
                field: SearchField::Filename,
                value: "2026-".to_string(),
            }),
            order: Some(Order {
                field: OrderField::CreatedAt,
                direction: OrderDirection::Desc,
            }),
        };
        assert_eq!(
            query.params(),
            vec![
                ("page", "2".to_string()),
                ("page_size", "25".to_string()),
                ("filter_type", "field-prefix".to_string()),
                ("filter_field", "filename".to_string()),
                ("filter_value", "2026-".to_string()),
                ("order_field", "created_at".to_string()),
                ("order_direction", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn filter_type_tokens() {
        assert_eq!(FilterType::Field.as_token(), "field");
        assert_eq!(FilterType::FieldPrefix.as_token(), "field-prefix");
        assert_eq!(FilterType::FieldSearch.as_token(), "field-search");
        assert_eq!(FilterType::Special.as_token(), "special");
    }
}
