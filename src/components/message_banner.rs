use yew::prelude::*;

use crate::banner::Banner;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub banner: Banner,
}

#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    html! {
        <div id="message" class={props.banner.classes()}>{ props.banner.text.clone() }</div>
    }
}
