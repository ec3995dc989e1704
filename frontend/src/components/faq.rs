use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::FaqEntry;
use crate::state::accordion::Accordion;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer.clone()}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
    pub accordion: Accordion,
    pub on_toggle: Callback<usize>,
}

/// Questions in order; the accordion decides which single one is expanded.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            {
                for props.entries.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = props.on_toggle.reform(move |_: ()| index);
                    html! {
                        <FaqItem
                            key={entry.question.clone()}
                            question={entry.question.clone()}
                            answer={entry.answer.clone()}
                            is_open={props.accordion.is_open(index)}
                            on_toggle={on_toggle}
                        />
                    }
                })
            }
            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: rgba(31, 41, 55, 0.3);
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(6, 182, 212, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    transition: all 0.3s ease;
                }

                .faq-item:hover {
                    border-color: rgba(6, 182, 212, 0.2);
                }

                .faq-question {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    font-size: 1.25rem;
                    color: #22d3ee;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.3s ease-in-out;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 24rem;
                    opacity: 1;
                    padding: 0 1.5rem 1rem;
                }

                .faq-answer p {
                    color: #d1d5db;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}
