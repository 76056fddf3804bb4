//! Query state, its reducer, and pagination metadata

use crate::config::CatalogConfig;
use crate::core::error::ValidationError;
use crate::core::predicate::{Dimension, NumericRange, Predicate, RangeBound};
use crate::core::record::Record;
use serde::{Deserialize, Serialize};

/// Default rows per page, as in the admin tables
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort key and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Parse `field`, `field:asc` or `field:desc`
    ///
    /// `ascending` and `descending` are accepted as direction aliases.
    pub fn parse(expr: &str) -> Result<Self, ValidationError> {
        let (field, direction) = match expr.split_once(':') {
            Some((field, dir)) => (field, dir),
            None => (expr, "asc"),
        };

        let field = field.trim();
        if field.is_empty() {
            return Err(ValidationError::InvalidSort {
                value: expr.to_string(),
            });
        }

        let direction = match direction.trim().to_lowercase().as_str() {
            "" | "asc" | "ascending" => SortDirection::Asc,
            "desc" | "descending" => SortDirection::Desc,
            _ => {
                return Err(ValidationError::InvalidSort {
                    value: expr.to_string(),
                });
            }
        };

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}

/// User input events applied to a [`QueryState`]
#[derive(Debug, Clone, PartialEq)]
pub enum QueryAction {
    SetSearch(String),
    SetCategory(Option<String>),
    SetStatus(Option<String>),
    SetRange(Option<NumericRange>),
    SetLocation(String),
    /// Same field flips direction, a new field starts ascending
    ToggleSort(String),
    ClearSort,
    SetPage(usize),
    SetPageSize(usize),
    Reset,
}

/// The full set of filter, sort and page selections for one listing view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub range: Option<NumericRange>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    /// Empty query on page 1
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            category: None,
            status: None,
            range: None,
            location: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Builder-style reducer application
    pub fn with(mut self, action: QueryAction) -> Self {
        self.apply(action);
        self
    }

    /// Apply one input event
    ///
    /// Every filter change sends the view back to page 1.
    pub fn apply(&mut self, action: QueryAction) {
        match action {
            QueryAction::SetSearch(term) => {
                self.search = term;
                self.page = 1;
            }
            QueryAction::SetCategory(value) => {
                self.category = normalize_choice(value);
                self.page = 1;
            }
            QueryAction::SetStatus(value) => {
                self.status = normalize_choice(value);
                self.page = 1;
            }
            QueryAction::SetRange(range) => {
                self.range = range;
                self.page = 1;
            }
            QueryAction::SetLocation(term) => {
                self.location = term;
                self.page = 1;
            }
            QueryAction::ToggleSort(field) => {
                self.sort = Some(match self.sort.take() {
                    Some(current) if current.field == field => SortSpec {
                        field,
                        direction: current.direction.flipped(),
                    },
                    _ => SortSpec::asc(field),
                });
            }
            QueryAction::ClearSort => self.sort = None,
            QueryAction::SetPage(page) => self.page = page.max(1),
            QueryAction::SetPageSize(size) => {
                self.page_size = size.max(1);
                self.page = 1;
            }
            QueryAction::Reset => *self = Self::new(self.page_size),
        }
    }

    /// Clamp the page into `[1, total_pages]`
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    /// True when no filter constrains the result
    pub fn is_unconstrained(&self) -> bool {
        self.predicates().is_empty()
    }

    /// Build the active predicates, skipping inactive inputs
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if !self.search.is_empty() {
            predicates.push(Predicate::text(&self.search));
        }
        if let Some(value) = normalize_choice(self.category.clone()) {
            predicates.push(Predicate::Equals {
                dimension: Dimension::Category,
                value,
            });
        }
        if let Some(value) = normalize_choice(self.status.clone()) {
            predicates.push(Predicate::Equals {
                dimension: Dimension::Status,
                value,
            });
        }
        if let Some(range) = self.range {
            predicates.push(Predicate::Range(range));
        }
        if !self.location.is_empty() {
            predicates.push(Predicate::location(&self.location));
        }

        predicates
    }
}

/// Map the "no constraint" inputs (`""`, `"All"`) to `None`
fn normalize_choice(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// Query parameters for listing endpoints
///
/// ```text
/// GET /products?search=sofa&category=Living%20Room&price=0-50000&page=2
/// GET /orders?status=Shipped&sort=amount:desc
/// GET /submissions?price_min=100&price_max=1000&limit=10
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QueryParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    /// Price bucket key from configuration
    pub price: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub location: Option<String>,
    /// `field`, `field:asc` or `field:desc`
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl QueryParams {
    /// Convert into a query state for records of type `T`
    pub fn to_state<T: Record>(
        &self,
        config: &CatalogConfig,
    ) -> Result<QueryState, ValidationError> {
        let page_size = match self.limit {
            Some(limit) => limit.clamp(1, config.listing.max_page_size),
            None => config.listing.default_page_size,
        };

        let mut state = QueryState::new(page_size)
            .with(QueryAction::SetSearch(self.search.clone().unwrap_or_default()))
            .with(QueryAction::SetCategory(self.category.clone()))
            .with(QueryAction::SetStatus(self.status.clone()))
            .with(QueryAction::SetRange(self.range(config)?))
            .with(QueryAction::SetLocation(self.location.clone().unwrap_or_default()));

        if let Some(expr) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            let sort = SortSpec::parse(expr)?;
            if !T::sort_fields().contains(&sort.field.as_str()) {
                return Err(ValidationError::UnknownSortField {
                    field: sort.field,
                    allowed: T::sort_fields().iter().map(|f| f.to_string()).collect(),
                });
            }
            state.sort = Some(sort);
        }

        state.apply(QueryAction::SetPage(self.page.unwrap_or(1)));
        Ok(state)
    }

    fn range(&self, config: &CatalogConfig) -> Result<Option<NumericRange>, ValidationError> {
        if let Some(key) = self.price.as_deref().filter(|k| !k.is_empty()) {
            let bucket = config.price_bucket(key).ok_or_else(|| {
                ValidationError::UnknownPriceBucket {
                    key: key.to_string(),
                }
            })?;
            return Ok(Some(bucket.range));
        }

        if self.price_min.is_none() && self.price_max.is_none() {
            return Ok(None);
        }

        let range = NumericRange {
            min: self.price_min.map(RangeBound::inclusive),
            max: self.price_max.map(RangeBound::inclusive),
        };
        if let Some(value) = range.non_finite_bound() {
            return Err(ValidationError::NonFiniteBound { value });
        }
        if range.is_inverted() {
            return Err(ValidationError::InvertedRange {
                min: self.price_min.unwrap_or_default(),
                max: self.price_max.unwrap_or_default(),
            });
        }
        Ok(Some(range))
    }
}

/// Paginated response structure
#[derive(Debug, Clone, Serialize)]
pub struct QueryPage<T> {
    /// Items on the served page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    /// Served page number (starts at 1, already clamped)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages, at least 1
    pub total_pages: usize,

    pub has_next: bool,

    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata, clamping `page` into range
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = total_pages(total, limit);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// `ceil(total / page_size)`, minimum 1
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}
