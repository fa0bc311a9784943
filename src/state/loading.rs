// Loading state for async view data.

/// Loading state for data fetched by a view on mount.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadingState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let loading: LoadingState<u32> = LoadingState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let loaded = LoadingState::Loaded(7);
        assert!(!loaded.is_loading());
        assert_eq!(loaded.data(), Some(&7));

        let failed: LoadingState<u32> = LoadingState::Error("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
        assert!(!failed.is_loading());
    }
}
