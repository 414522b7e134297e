//! Row templates.
//!
//! A [`Template`] owns a piece of content and clones it once per item; an
//! [`ItemRenderer`] writes the item into the clone. The template itself has
//! no idea what a task is.

use crate::record::{TaskElement, TaskRecord, TaskStatus};

/// Writes one item into a cloned template.
///
/// `hint` is the suggested index of the item; the renderer decides what to
/// do with it.
pub trait ItemRenderer<T: ?Sized> {
    type Target;

    fn populate(&self, item: &T, target: &mut Self::Target, hint: usize);
}

/// An owned batch of populated template clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<C> {
    items: Vec<C>,
}

impl<C> Fragment<C> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<C> {
        self.items
    }
}

impl<C> IntoIterator for Fragment<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[derive(Debug, Clone)]
pub struct Template<C, R> {
    content: C,
    renderer: R,
}

impl<C: Clone, R> Template<C, R> {
    pub fn new(content: C, renderer: R) -> Self {
        Self { content, renderer }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Clones the content and populates it with `item`.
    pub fn fill_item<T>(&self, item: &T, hint: usize) -> C
    where
        T: ?Sized,
        R: ItemRenderer<T, Target = C>,
    {
        let mut result = self.content.clone();
        self.renderer.populate(item, &mut result, hint);
        result
    }

    /// One populated clone per item, with hints `0, 1, 2, ...`.
    pub fn fill_collection<'a, T>(&self, items: impl IntoIterator<Item = &'a T>) -> Fragment<C>
    where
        T: ?Sized + 'a,
        R: ItemRenderer<T, Target = C>,
    {
        self.fill_collection_from(items, 0)
    }

    /// Like [`Self::fill_collection`], with hints counting up from `start`.
    pub fn fill_collection_from<'a, T>(
        &self,
        items: impl IntoIterator<Item = &'a T>,
        start: usize,
    ) -> Fragment<C>
    where
        T: ?Sized + 'a,
        R: ItemRenderer<T, Target = C>,
    {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(offset, item)| self.fill_item(item, start + offset))
            .collect();
        Fragment { items }
    }
}

/// Populates task rows.
///
/// The row index is taken from the hint as is; callers that append to a
/// non-empty list pass the next free index as the batch start.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskRowRenderer;

impl ItemRenderer<TaskRecord> for TaskRowRenderer {
    type Target = TaskElement;

    fn populate(&self, record: &TaskRecord, target: &mut TaskElement, hint: usize) {
        target.id = record.id;
        target.title = record.task_name.clone();
        target.status = record.status();
        target.index = hint;
    }
}

/// Display-only rows from bare titles.
///
/// Each row gets a fresh id that no store knows about, so toggling or
/// removing such a row never reaches storage. Persisted rows come from
/// [`TaskRecord`]s.
impl ItemRenderer<str> for TaskRowRenderer {
    type Target = TaskElement;

    fn populate(&self, title: &str, target: &mut TaskElement, hint: usize) {
        let record = TaskRecord::new(title);
        target.id = record.id;
        target.title = record.task_name;
        target.status = TaskStatus::Unchecked;
        target.index = hint;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> Template<TaskElement, TaskRowRenderer> {
        Template::new(TaskElement::blank(), TaskRowRenderer)
    }

    #[test]
    fn test_fill_item_leaves_content_untouched() {
        let template = template();
        let record = TaskRecord::new("Buy milk");
        let element = template.fill_item(&record, 3);

        assert_eq!(element.id, record.id);
        assert_eq!(element.title, "Buy milk");
        assert_eq!(element.index, 3);
        assert_eq!(template.content(), &TaskElement::blank());
    }

    #[test]
    fn test_fill_item_copies_checked_state() {
        let mut record = TaskRecord::new("Done already");
        record.checked = true;
        let element = template().fill_item(&record, 0);
        assert!(element.is_done());
        assert_eq!(element.class_name(), "task done");
    }

    #[test]
    fn test_fill_collection_assigns_sequential_hints() {
        let records = vec![TaskRecord::new("A"), TaskRecord::new("B"), TaskRecord::new("C")];
        let fragment = template().fill_collection(&records);

        assert_eq!(fragment.len(), 3);
        let indices: Vec<_> = fragment.iter().map(|element| element.index).collect();
        assert_eq!(indices, [0, 1, 2]);
        let titles: Vec<_> = fragment.iter().map(|element| element.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn test_fill_collection_from_offsets_hints() {
        let fragment = template().fill_collection_from(["x", "y"], 5);
        let indices: Vec<_> = fragment.into_iter().map(|element| element.index).collect();
        assert_eq!(indices, [5, 6]);
    }

    #[test]
    fn test_title_items_get_distinct_ids() {
        let titles = vec!["x".to_string(), "x".to_string()];
        let fragment = template().fill_collection(titles.iter().map(String::as_str));
        let elements = fragment.into_vec();
        assert_ne!(elements[0].id, elements[1].id);
        assert!(!elements[0].is_done());
    }

    #[test]
    fn test_empty_collection() {
        let fragment = template().fill_collection(&Vec::<TaskRecord>::new());
        assert!(fragment.is_empty());
    }
}
