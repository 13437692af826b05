/// `limit` / `offset` query parameters of a list request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// Pagination with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Pagination {
    pub fn resolve(self, default_limit: u64) -> Page {
        Page {
            limit: self.limit.unwrap_or(default_limit),
            offset: self.offset.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_fills_defaults() {
        assert_eq!(Pagination::default().resolve(20), Page { limit: 20, offset: 0 });
        let explicit = Pagination {
            limit: Some(2),
            offset: Some(1),
        };
        assert_eq!(explicit.resolve(20), Page { limit: 2, offset: 1 });
    }
}
