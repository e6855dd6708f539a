/// Builder for the content store's query-string dialect.
///
/// Relation expansion is positional (`populate[0]=`, `populate[1]=`...),
/// equality filters nest the field path (`filters[ship][documentId][$eq]=`),
/// and sorting is `sort=field:direction`. Output order follows call
/// order, so identical builds produce identical strings.
///
/// Values are passed through verbatim: slugs and document ids are plain
/// ASCII by construction upstream, and the store itself does not decode
/// percent escapes in filter values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Query {
    params: Vec<String>,
    populate_count: usize,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn populate(mut self, relation: &str) -> Self {
        self.params
            .push(format!("populate[{}]={relation}", self.populate_count));
        self.populate_count += 1;
        self
    }

    pub fn filter_eq(mut self, path: &[&str], value: &str) -> Self {
        let mut key = String::from("filters");
        for segment in path {
            key.push('[');
            key.push_str(segment);
            key.push(']');
        }
        self.params.push(format!("{key}[$eq]={value}"));
        self
    }

    pub fn sort(mut self, expr: &str) -> Self {
        self.params.push(format!("sort={expr}"));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render as a path suffix: `?a=b&c=d`, or `""` for an empty query.
    pub fn to_suffix(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        format!("?{}", self.params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::Query;
    use pretty_assertions::assert_eq;

    #[test]
    fn populate_indices_count_up() {
        let q = Query::new()
            .populate("operator")
            .populate("apartments")
            .populate("itineraries.stops")
            .populate("heroImage")
            .populate("gallery")
            .sort("id:asc");
        assert_eq!(
            q.to_suffix(),
            "?populate[0]=operator&populate[1]=apartments&populate[2]=itineraries.stops&populate[3]=heroImage&populate[4]=gallery&sort=id:asc"
        );
    }

    #[test]
    fn filters_nest_the_field_path() {
        let q = Query::new()
            .filter_eq(&["ship", "documentId"], "abc123")
            .populate("ship");
        assert_eq!(
            q.to_suffix(),
            "?filters[ship][documentId][$eq]=abc123&populate[0]=ship"
        );
    }

    #[test]
    fn slug_filter_shape() {
        let q = Query::new()
            .filter_eq(&["slug"], "mv-meridian")
            .populate("operator");
        assert_eq!(
            q.to_suffix(),
            "?filters[slug][$eq]=mv-meridian&populate[0]=operator"
        );
    }

    #[test]
    fn empty_query_renders_nothing() {
        assert_eq!(Query::new().to_suffix(), "");
        assert!(Query::new().is_empty());
    }
}
