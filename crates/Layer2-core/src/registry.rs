//! Subscription Registry - 이벤트 이름별 리스너 목록
//!
//! 이름이 없는 항목은 빈 목록과 같게 취급합니다. 이름 순회는 처음 등록된
//! 순서를 따릅니다.

use crate::listener::Listener;
use std::collections::HashMap;

// ============================================================================
// ListenerList
// ============================================================================

/// Ordered, index-addressable sequence of listeners for one event name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerList {
    listeners: Vec<Listener>,
}

impl ListenerList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 뒤에 추가
    pub fn push(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// 앞에 추가
    pub fn unshift(&mut self, listener: Listener) {
        self.listeners.insert(0, listener);
    }

    pub fn get(&self, index: usize) -> Option<&Listener> {
        self.listeners.get(index)
    }

    pub fn first(&self) -> Option<&Listener> {
        self.listeners.first()
    }

    /// 인덱스로 제거
    pub fn remove(&mut self, index: usize) -> Option<Listener> {
        if index < self.listeners.len() {
            Some(self.listeners.remove(index))
        } else {
            None
        }
    }

    /// First index of `listener`, by handle equality.
    pub fn position(&self, listener: &Listener) -> Option<usize> {
        self.listeners.iter().position(|l| l == listener)
    }

    pub fn contains(&self, listener: &Listener) -> bool {
        self.position(listener).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listener> {
        self.listeners.iter()
    }

    pub fn to_vec(&self) -> Vec<Listener> {
        self.listeners.clone()
    }
}

impl<'a> IntoIterator for &'a ListenerList {
    type Item = &'a Listener;
    type IntoIter = std::slice::Iter<'a, Listener>;

    fn into_iter(self) -> Self::IntoIter {
        self.listeners.iter()
    }
}

impl FromIterator<Listener> for ListenerList {
    fn from_iter<I: IntoIterator<Item = Listener>>(iter: I) -> Self {
        Self {
            listeners: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// SubscriptionRegistry
// ============================================================================

/// Event name → listener list, iterated in insertion order of names.
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    /// (이름, 목록) - 삽입 순서 유지
    entries: Vec<(String, ListenerList)>,

    /// 이름 -> entries 인덱스
    index: HashMap<String, usize>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ListenerList> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ListenerList> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    /// 없으면 빈 목록을 만들어 반환
    pub fn get_or_init(&mut self, name: &str) -> &mut ListenerList {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                self.entries.push((name.to_string(), ListenerList::new()));
                let i = self.entries.len() - 1;
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.entries[i].1
    }

    /// Replace the list for `name`, keeping its position if it already exists.
    pub fn set(&mut self, name: &str, list: ListenerList) {
        *self.get_or_init(name) = list;
    }

    /// 항목 전체 삭제
    pub fn delete(&mut self, name: &str) -> Option<ListenerList> {
        let i = self.index.remove(name)?;
        let (_, list) = self.entries.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(list)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ListenerList)> {
        self.entries.iter().map(|(name, list)| (name.as_str(), list))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut ListenerList)> {
        self.entries
            .iter_mut()
            .map(|(name, list)| (name.as_str(), list))
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    /// 이름 개수 (빈 목록 포함)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use herald_foundation::{Event, Result};

    fn noop(_: &mut dyn Event) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_list_push_unshift() {
        let a = Listener::new(noop);
        let b = Listener::new(noop);
        let c = Listener::new(noop);

        let mut list = ListenerList::new();
        list.push(a.clone());
        list.push(b.clone());
        list.unshift(c.clone());

        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), Some(&c));
        assert_eq!(list.get(1), Some(&a));
        assert_eq!(list.get(2), Some(&b));
        assert_eq!(list.first(), Some(&c));
    }

    #[test]
    fn test_list_position_and_remove() {
        let a = Listener::new(noop);
        let b = Listener::new(noop);
        let mut list: ListenerList = vec![a.clone(), b.clone()].into_iter().collect();

        assert_eq!(list.position(&b), Some(1));
        assert_eq!(list.remove(0), Some(a.clone()));
        assert_eq!(list.position(&a), None);
        assert_eq!(list.remove(5), None);
        assert!(list.contains(&b));
    }

    #[test]
    fn test_registry_lazy_init() {
        let mut registry = SubscriptionRegistry::new();
        assert!(!registry.has("EventA"));
        assert!(registry.get("EventA").is_none());

        assert!(registry.get_or_init("EventA").is_empty());
        assert!(registry.has("EventA"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_insertion_order_survives_delete() {
        let listener = Listener::new(noop);
        let mut registry = SubscriptionRegistry::new();
        registry.get_or_init("A");
        registry.get_or_init("B");
        registry.get_or_init("C").push(listener.clone());

        assert!(registry.delete("A").is_some());
        assert!(registry.delete("A").is_none());

        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert!(registry.get("C").unwrap().contains(&listener));
    }

    #[test]
    fn test_registry_set_replaces() {
        let listener = Listener::new(noop);
        let mut registry = SubscriptionRegistry::new();
        registry.get_or_init("A");
        registry.get_or_init("B");

        registry.set("A", std::iter::once(listener.clone()).collect());

        assert_eq!(registry.names(), vec!["A".to_string(), "B".to_string()]);
        assert_eq!(registry.get("A").unwrap().first(), Some(&listener));
    }

    #[test]
    fn test_registry_iter_mut() {
        let listener = Listener::new(noop);
        let mut registry = SubscriptionRegistry::new();
        registry.get_or_init("A").push(listener.clone());
        registry.get_or_init("B").push(listener.clone());

        for (_, list) in registry.iter_mut() {
            if let Some(i) = list.position(&listener) {
                list.remove(i);
            }
        }

        assert!(registry.iter().all(|(_, list)| list.is_empty()));
    }
}
