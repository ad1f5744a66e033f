use crate::config::MAX_SIZE;
use crate::resource::ResourceError;
use tracing::{debug, warn};

/// Sole owner of a bounded sequence of integers.
///
/// Data only enters through [`ResourceManager::add_data`], which takes the
/// caller's `Vec` by value, and only leaves as a borrowed slice.
#[derive(Debug, Default)]
pub struct ResourceManager {
    data: Vec<i32>,
}

impl ResourceManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored data with `data`.
    ///
    /// # Errors
    /// Returns [`ResourceError::LengthExceeded`] if `data` holds more than
    /// [`MAX_SIZE`] elements. The previously stored data is kept as-is.
    pub fn add_data(&mut self, data: Vec<i32>) -> Result<(), ResourceError> {
        if data.len() > MAX_SIZE {
            warn!(len = data.len(), max = MAX_SIZE, "Rejected oversized data");
            return Err(ResourceError::LengthExceeded {
                len: data.len(),
                max: MAX_SIZE,
            });
        }
        debug!(len = data.len(), "Replacing managed data");
        self.data = data;
        Ok(())
    }

    pub fn data(&self) -> &[i32] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_manager_is_empty() {
        let manager = ResourceManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.data(), &[] as &[i32]);
    }

    #[test]
    fn test_add_five_elements() {
        let mut manager = ResourceManager::new();
        let data = vec![1, 2, 3, 4, 5];
        manager.add_data(data).unwrap();
        assert_eq!(manager.data().len(), 5);
        assert_eq!(manager.data(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_oversized_data_rejected() {
        let mut manager = ResourceManager::new();
        let err = manager.add_data(vec![0; MAX_SIZE + 1]).unwrap_err();
        assert_eq!(
            err,
            ResourceError::LengthExceeded {
                len: MAX_SIZE + 1,
                max: MAX_SIZE
            }
        );
        assert!(manager.is_empty());
    }

    #[test]
    fn test_rejection_keeps_previous_data() {
        let mut manager = ResourceManager::new();
        manager.add_data(vec![7, 8, 9]).unwrap();
        assert!(manager.add_data(vec![1; 250]).is_err());
        assert_eq!(manager.data(), &[7, 8, 9]);
    }

    #[test]
    fn test_exactly_max_size_accepted() {
        let mut manager = ResourceManager::new();
        let data: Vec<i32> = (0..MAX_SIZE as i32).collect();
        manager.add_data(data.clone()).unwrap();
        assert_eq!(manager.len(), MAX_SIZE);
        assert_eq!(manager.data(), data.as_slice());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut manager = ResourceManager::new();
        manager.add_data(vec![1, 2, 3, 4, 5]).unwrap();
        manager.add_data(vec![42]).unwrap();
        assert_eq!(manager.data(), &[42]);
        manager.add_data(Vec::new()).unwrap();
        assert!(manager.is_empty());
    }
}
