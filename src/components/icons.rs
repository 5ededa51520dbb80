use yew::prelude::*;

pub fn sun() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" aria-hidden="true"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2" /><path d="M12 20v2" />
            <path d="M4.93 4.93l1.41 1.41" /><path d="M17.66 17.66l1.41 1.41" />
            <path d="M2 12h2" /><path d="M20 12h2" />
            <path d="M4.93 19.07l1.41-1.41" /><path d="M17.66 6.34l1.41-1.41" />
        </svg>
    }
}

pub fn moon() -> Html {
    html! {
        <svg viewBox="0 0 24 24" fill="none" aria-hidden="true"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M21 12.8A8.5 8.5 0 0 1 11.2 3a6.5 6.5 0 1 0 9.8 9.8Z" />
        </svg>
    }
}

pub fn chevron() -> Html {
    html! {
        <svg class="chev" viewBox="0 0 24 24" fill="none" aria-hidden="true"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M6 9l6 6 6-6" />
        </svg>
    }
}
