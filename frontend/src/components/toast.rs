use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub visible: bool,
    pub message: AttrValue,
}

/// Bottom-right banner. Timing lives in the toast scheduler; this only shows
/// or hides.
#[function_component(ToastBanner)]
pub fn toast_banner(props: &ToastProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="toast" role="status">
            <span class="toast-icon">{"🚀"}</span>
            <p>{props.message.clone()}</p>
            <style>
                {r#"
                    @keyframes slideIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        position: fixed;
                        bottom: 1rem;
                        right: 1rem;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        max-width: 24rem;
                        padding: 1rem 1.25rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(to right, #0891b2, #4f46e5);
                        color: #fff;
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                        animation: slideIn 0.4s ease-out forwards;
                    }
                    .toast p {
                        margin: 0;
                        font-weight: 500;
                    }
                    .toast-icon {
                        font-size: 1.25rem;
                    }
                "#}
            </style>
        </div>
    }
}
