use std::rc::Rc;

use tasklist::config::{
    ADD_CLASS, DELETE_CLASS, DONE_CLASS, ICON_CLASS, INDEX_ATTRIBUTE, INPUT_CLASS, TASK_CLASS,
    TASK_LIST_CLASS, TITLE_CLASS,
};
use tasklist::{TaskElement, TaskList, TaskStore};
use zoon::{Rgba, *};

use crate::events;

const CHECKED_ICON: &str = "✔";
const UNCHECKED_ICON: &str = "○";

fn text_color() -> Rgba {
    color!("#1f2430")
}

fn done_text_color() -> Rgba {
    color!("rgba(31, 36, 48, 0.45)")
}

fn delete_color() -> Rgba {
    color!("#c0392b")
}

/// The whole widget: the new-task input row above the task rows.
pub fn root<S: TaskStore + 'static>(tasks: Rc<TaskList<S>>) -> impl Element {
    Column::new()
        .s(Width::fill().max(600))
        .s(Align::new().center_x())
        .s(Padding::all(20))
        .s(Gap::new().y(12))
        .item(new_task_row(tasks.clone()))
        .item(task_rows(tasks))
}

fn new_task_row<S: TaskStore + 'static>(tasks: Rc<TaskList<S>>) -> impl Element {
    Row::new()
        .s(Gap::new().x(8))
        .item(new_task_input(tasks.clone()))
        .item(
            Button::new()
                .s(Padding::new().x(12).y(6))
                .label("+")
                .update_raw_el(|raw_el| raw_el.class(ADD_CLASS))
                .on_press(move || events::add_task(&tasks)),
        )
}

fn new_task_input<S: TaskStore + 'static>(tasks: Rc<TaskList<S>>) -> impl Element {
    let tasks_for_change = tasks.clone();
    TextInput::new()
        .s(Width::fill())
        .s(Padding::new().x(8).y(6))
        .label_hidden("New task")
        .placeholder(Placeholder::new("What needs to be done?"))
        .text_signal(tasks.input().signal_cloned())
        .on_change(move |text| tasks_for_change.set_input(text))
        .on_key_down_event(move |event| {
            if let Key::Enter = event.key() {
                events::add_task(&tasks);
            }
        })
        .update_raw_el(|raw_el| raw_el.class(INPUT_CLASS).attr("autocomplete", "off"))
}

fn task_rows<S: TaskStore + 'static>(tasks: Rc<TaskList<S>>) -> impl Element {
    let tasks_for_rows = tasks.clone();
    Column::new()
        .s(Gap::new().y(6))
        .update_raw_el(|raw_el| raw_el.class(TASK_LIST_CLASS))
        .items_signal_vec(
            tasks
                .elements()
                .signal_vec_cloned()
                .map(move |element| task_row(tasks_for_rows.clone(), element)),
        )
}

/// One task: toggle icon, title and delete button.
///
/// Rows are plain values; a toggle or reindex replaces the row in the list
/// and Zoon redraws it.
fn task_row<S: TaskStore + 'static>(tasks: Rc<TaskList<S>>, element: TaskElement) -> impl Element {
    let done = element.is_done();
    let index = element.index.to_string();
    let (icon, color) = if done {
        (CHECKED_ICON, done_text_color())
    } else {
        (UNCHECKED_ICON, text_color())
    };

    let toggle = {
        let tasks = tasks.clone();
        let element = element.clone();
        move || events::mark_task_status(&tasks, &element)
    };
    let remove = {
        let element = element.clone();
        move || events::remove_task(&tasks, &element)
    };

    Row::new()
        .s(Gap::new().x(10))
        .s(Padding::new().x(8).y(4))
        .update_raw_el(move |raw_el| {
            let raw_el = raw_el.class(TASK_CLASS).attr(INDEX_ATTRIBUTE, &index);
            if done { raw_el.class(DONE_CLASS) } else { raw_el }
        })
        .item(
            El::new()
                .s(Cursor::new(CursorIcon::Pointer))
                .s(Font::new().color(color))
                .update_raw_el(|raw_el| raw_el.class(ICON_CLASS))
                .on_click(toggle)
                .child(icon),
        )
        .item(
            El::new()
                .s(Width::fill())
                .s(Font::new().color(color))
                .update_raw_el(|raw_el| raw_el.class(TITLE_CLASS))
                .child(element.title),
        )
        .item(
            Button::new()
                .s(Font::new().color(delete_color()))
                .label("✕")
                .update_raw_el(|raw_el| raw_el.class(DELETE_CLASS))
                .on_press(remove),
        )
}
