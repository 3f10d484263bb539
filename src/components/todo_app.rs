//! Todo App Component
//!
//! Add/remove todo list over the `TodoList` reducer. The same markup is
//! rendered with one of three class sets.

use leptos::html;
use leptos::prelude::*;

use crate::hooks::use_reducer;
use crate::list::ListItem;
use crate::reducer::{TodoAction, TodoList};
use crate::store::StyleVariant;

/// CSS classes for each element of the todo markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoClasses {
    pub title: &'static str,
    pub container: &'static str,
    pub form: &'static str,
    pub add_button: &'static str,
    pub list: &'static str,
    pub row: &'static str,
    pub text: &'static str,
    pub remove_button: &'static str,
}

impl TodoClasses {
    pub fn for_variant(variant: StyleVariant) -> Self {
        match variant {
            StyleVariant::Vanilla => TodoClasses {
                title: "title",
                container: "todo-container",
                form: "form",
                add_button: "form__button form__button--add",
                list: "todos",
                row: "todo",
                text: "todo__text",
                remove_button: "todo__button",
            },
            StyleVariant::Modules => TodoClasses {
                title: "todoModule_title",
                container: "todoModule_todoContainer",
                form: "todoModule_form",
                add_button: "todoModule_formButton todoModule_formButtonAdd",
                list: "todoModule_todos",
                row: "todoModule_todo",
                text: "todoModule_todoText",
                remove_button: "todoModule_todoButton",
            },
            StyleVariant::Styled => TodoClasses {
                title: "sc-title",
                container: "sc-wrapper",
                form: "sc-form",
                add_button: "sc-button sc-button--primary sc-button--large",
                list: "sc-list",
                row: "sc-todo",
                text: "sc-todo-text",
                remove_button: "sc-button sc-button--small",
            },
        }
    }
}

#[component]
pub fn TodoApp(#[prop(into)] variant: Signal<StyleVariant>) -> impl IntoView {
    let (todos, dispatch) = use_reducer(TodoList::default());
    let input_ref = NodeRef::<html::Input>::new();
    let classes = move || TodoClasses::for_variant(variant.get());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else { return };
        let text = input.value();
        if text.trim().is_empty() {
            return;
        }
        dispatch.run(TodoAction::Add(text));
        input.set_value("");
    };

    view! {
        <h1 class=move || classes().title>"TODO App"</h1>
        <div class=move || classes().container>
            <form class=move || classes().form on:submit=add_todo>
                <input placeholder="Add TODO" node_ref=input_ref />
                <button type="submit" class=move || classes().add_button>"➕"</button>
            </form>
            <section class=move || classes().list>
                <For
                    each=move || todos.with(|t| t.items().render())
                    key={|todo: &ListItem<String>| todo.id}
                    children={move |todo: ListItem<String>| {
                        let id = todo.id;
                        view! {
                            <div class=move || classes().row>
                                <span class=move || classes().text>{todo.value}</span>
                                <button
                                    class=move || classes().remove_button
                                    on:click=move |_| dispatch.run(TodoAction::Remove(id))
                                >
                                    "🗑"
                                </button>
                            </div>
                        }
                    }}
                />
            </section>
            {move || todos.with(|t| t.last_error()).map(|e| view! {
                <p class="todo-error">{e.to_string()}</p>
            })}
            <p class="item-count">{move || format!("{} todos", todos.with(|t| t.items().len()))}</p>
        </div>
    }
}
