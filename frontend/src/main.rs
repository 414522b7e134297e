use std::rc::Rc;

use tasklist::zoon::*;
use tasklist::{TaskList, TaskListConfig};

fn main() {
    start_app("app", || {
        let tasks = Rc::new(TaskList::in_browser(TaskListConfig::default()));
        tasks.show_all_tasks();
        tasklist_renderer_zoon::root(tasks)
    });
}
