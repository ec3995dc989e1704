use std::rc::Rc;

use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::ServiceOffering;
use crate::state::modal::ClickTarget;

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub service: Rc<ServiceOffering>,
    pub on_close: Callback<()>,
    pub on_click: Callback<ClickTarget>,
}

fn bullet_list(items: &[String]) -> Html {
    html! {
        <ul class="modal-list">
            { for items.iter().map(|item| html! { <li key={item.clone()}>{item}</li> }) }
        </ul>
    }
}

/// Detail overlay for one service. Everything shown comes from the service's
/// detail bundle; a service without one gets empty sections.
#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let service = &props.service;

    let on_backdrop = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(ClickTarget::Backdrop))
    };

    // Clicks inside the panel must not reach the backdrop.
    let on_panel = {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_click.emit(ClickTarget::Panel);
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay visible" onclick={on_backdrop}>
            <div class="modal-content" role="dialog" aria-modal="true" onclick={on_panel}>
                <div class="modal-header">
                    <div>
                        <h3>{&service.title}</h3>
                        <p class="modal-subtitle">{&service.subtitle}</p>
                    </div>
                    <button class="modal-close" aria-label="Close" onclick={close.clone()}>{"✕"}</button>
                </div>

                <div class="modal-section">
                    <h4>{"Use Cases"}</h4>
                    { bullet_list(service.use_cases()) }
                </div>

                <div class="modal-section">
                    <h4>{"Implementation Process"}</h4>
                    <ol class="modal-steps">
                        {
                            for service.implementation_steps().iter().enumerate().map(|(i, step)| html! {
                                <li key={step.clone()}>
                                    <span class="step-number">{i + 1}</span>
                                    <span>{step}</span>
                                </li>
                            })
                        }
                    </ol>
                </div>

                <div class="modal-section">
                    <h4>{"ROI & Benefits"}</h4>
                    { bullet_list(service.roi_points()) }
                </div>

                <button class="modal-cta" onclick={close}>
                    {format!("Get Started with {}", service.title)}
                </button>
            </div>

            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(4px);
                }

                .modal-content {
                    width: 100%;
                    max-width: 42rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(6, 182, 212, 0.2);
                    background: #111827;
                    color: #fff;
                }

                .modal-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                }

                .modal-header h3 {
                    margin: 0;
                    font-size: 1.5rem;
                }

                .modal-subtitle {
                    color: #22d3ee;
                    margin: 0.25rem 0 0;
                }

                .modal-close {
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.25rem;
                    cursor: pointer;
                }

                .modal-close:hover {
                    color: #fff;
                }

                .modal-section {
                    margin-bottom: 1.5rem;
                }

                .modal-section h4 {
                    color: #22d3ee;
                    margin-bottom: 0.75rem;
                }

                .modal-list, .modal-steps {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    color: #d1d5db;
                }

                .modal-list li, .modal-steps li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.35rem 0;
                }

                .step-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 1.75rem;
                    height: 1.75rem;
                    border-radius: 9999px;
                    background: rgba(6, 182, 212, 0.2);
                    color: #22d3ee;
                    font-size: 0.875rem;
                }

                .modal-cta {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: linear-gradient(to right, #0891b2, #4f46e5);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
