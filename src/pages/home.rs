use leptos::prelude::*;

use super::{DASHBOARD_PATH, LOGIN_PATH};

/// Landing page of the AI Tutor Platform.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center justify-center p-8">
            <div class="text-center">
                <h1 class="text-4xl font-bold tracking-tight text-gray-900 sm:text-6xl">
                    "AI Tutor Platform"
                </h1>
                <p class="mt-6 text-lg leading-8 text-gray-600">
                    "AI-powered learning platform with vision AI, interactive tutors, and adaptive learning."
                </p>
                <div class="mt-10 flex items-center justify-center gap-x-6">
                    <a
                        href=DASHBOARD_PATH
                        class="rounded-md bg-indigo-600 px-3.5 py-2.5 text-sm font-semibold text-white shadow-sm hover:bg-indigo-500 focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-indigo-600"
                    >
                        "Get Started"
                    </a>
                    <a href=LOGIN_PATH class="text-sm font-semibold leading-6 text-gray-900">
                        "Log in " <span aria-hidden="true">"→"</span>
                    </a>
                </div>
            </div>
        </main>
    }
}
