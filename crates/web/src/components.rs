//! Leptos components for the Adboard admin UI

use leptos::*;
use leptos_router::*;

use catalog::{
    display_rank, page::clamp_page, page::page_window, FormEvent, FormMode, FormPhase,
    ImageSelection, PageMeta, ProductDraft, ProductListing, ProductRow,
};

// =============================================================================
// Layout Components
// =============================================================================

/// Main layout component with sidebar navigation
#[component]
pub fn Layout(
    /// Page title shown in header
    title: String,
    /// Page content
    children: Children,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <Sidebar/>
        </aside>

        <div class="main-wrapper">
            <header>
                <div class="header-eyebrow">"Settings"</div>
                <h1>{title}</h1>
            </header>
            <main>{children()}</main>
        </div>
    }
}

/// Sidebar navigation component
#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <a href="/" class="sidebar-logo">"Adboard"</a>

        <div class="sidebar-section">
            <div class="sidebar-section-title">"Settings"</div>
            <A href="/" class="sidebar-link">
                <span class="sidebar-icon">"\u{25A3}"</span>
                " Content"
            </A>
        </div>
    }
}

// =============================================================================
// Shared Components
// =============================================================================

/// Loading state component
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            "Loading"
        </div>
    }
}

/// Active/inactive badge component
#[component]
pub fn StatusBadge(active: bool) -> impl IntoView {
    let (class, label) = if active {
        ("badge badge-status active", "Active")
    } else {
        ("badge badge-status inactive", "Inactive")
    };
    view! { <span class=class>{label}</span> }
}

/// Empty state component
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <p>{message}</p>
        </div>
    }
}

// =============================================================================
// Product List Page
// =============================================================================

/// Content management page: the enriched table plus pagination.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let (page, set_page) = create_signal(1u32);

    // Keyed on the page: navigating refetches, and only the latest
    // fetch ever renders, so a stale in-flight response is dropped.
    let products = create_resource(move || page.get(), |page| async move {
        load_products(page).await
    });

    view! {
        <Layout title="Content Management".to_string()>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    products
                        .get()
                        .map(|result| {
                            match result {
                                Ok(listing) => {
                                    view! {
                                        <div class="list-header">
                                            <div class="list-total">
                                                "Total: " {listing.meta.total_items} " records"
                                            </div>
                                            <A href="/new" class="button button-outline">
                                                "Register Content"
                                            </A>
                                        </div>

                                        <ProductTable
                                            rows=listing.rows.clone()
                                            meta=listing.meta.clone()
                                        />

                                        <Pagination
                                            current=listing.meta.current_page
                                            total=listing.meta.total_pages
                                            set_page=set_page
                                        />
                                    }
                                        .into_view()
                                }
                                Err(e) => {
                                    view! {
                                        <div class="error">"Error loading content: " {e}</div>
                                        <button
                                            class="button"
                                            on:click=move |_| products.refetch()
                                        >
                                            "Retry"
                                        </button>
                                    }
                                        .into_view()
                                }
                            }
                        })
                }}

            </Suspense>
        </Layout>
    }
}

/// Content table component
#[component]
fn ProductTable(rows: Vec<ProductRow>, meta: PageMeta) -> impl IntoView {
    if rows.is_empty() {
        return view! { <EmptyState message="No content yet."/> }.into_view();
    }

    view! {
        <table>
            <thead>
                <tr>
                    <th>"No."</th>
                    <th>"Logo"</th>
                    <th>"Company"</th>
                    <th>"Phone"</th>
                    <th>"Card"</th>
                    <th>"Title"</th>
                    <th>"Status"</th>
                    <th>"Posting Period"</th>
                    <th>"Manage"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| {
                        let href = format!("/edit/{}", row.summary.id);
                        let company = if row.summary.company_name.is_empty() {
                            "-".to_string()
                        } else {
                            row.summary.company_name.clone()
                        };
                        let period = format!(
                            "{} ~ {}",
                            format_date(row.summary.start_date.as_deref()),
                            format_date(row.summary.end_date.as_deref())
                        );
                        view! {
                            <tr>
                                <td>{display_rank(&meta, index)}</td>
                                <td>
                                    <img class="logo-thumb" src=row.summary.logo_image_url/>
                                </td>
                                <td>{company}</td>
                                <td>{row.phone_number}</td>
                                <td>
                                    <img class="card-thumb" src=row.summary.product_image_url/>
                                </td>
                                <td>{row.summary.title}</td>
                                <td>
                                    <StatusBadge active=row.is_active/>
                                </td>
                                <td>{period}</td>
                                <td>
                                    <A href=href class="button button-small">"Edit"</A>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}

            </tbody>
        </table>
    }
    .into_view()
}

fn format_date(date: Option<&str>) -> String {
    match date {
        // Dates arrive as ISO timestamps; only the date part is shown.
        Some(d) if !d.is_empty() => d.chars().take(10).collect(),
        _ => "-".to_string(),
    }
}

/// Pagination controls; renders nothing for a single page.
#[component]
fn Pagination(current: u32, total: u32, set_page: WriteSignal<u32>) -> impl IntoView {
    if total <= 1 {
        return ().into_view();
    }

    let go = move |target: u32| set_page.set(clamp_page(target, total));

    view! {
        <div class="pagination">
            <button
                class="page-button"
                disabled={current == 1}
                on:click=move |_| go(1)
            >
                "\u{00AB}"
            </button>
            <button
                class="page-button"
                disabled={current == 1}
                on:click=move |_| go(current.saturating_sub(1))
            >
                "\u{2039}"
            </button>

            {page_window(current, total)
                .map(|n| {
                    let class = if n == current { "page-button current" } else { "page-button" };
                    view! {
                        <button class=class on:click=move |_| go(n)>
                            {n}
                        </button>
                    }
                })
                .collect_view()}

            <button
                class="page-button"
                disabled={current == total}
                on:click=move |_| go(current + 1)
            >
                "\u{203A}"
            </button>
            <button
                class="page-button"
                disabled={current == total}
                on:click=move |_| go(total)
            >
                "\u{00BB}"
            </button>
        </div>
    }
    .into_view()
}

// =============================================================================
// Product Form Pages
// =============================================================================

/// Create form page
#[component]
pub fn NewProductPage() -> impl IntoView {
    view! {
        <Layout title="Register Content".to_string()>
            <ProductForm mode=FormMode::Create/>
        </Layout>
    }
}

/// Edit form page: a blocking detail fetch gates entry; failure shows
/// the error with a way back to the list.
#[component]
pub fn EditProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let detail = create_resource(product_id, |id| async move { load_detail(&id).await });

    view! {
        <Layout title="Edit Content".to_string()>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    detail
                        .get()
                        .map(|result| {
                            match result {
                                Ok(detail) => {
                                    view! { <ProductForm mode=FormMode::Edit(detail)/> }
                                        .into_view()
                                }
                                Err(e) => {
                                    view! {
                                        <div class="error">"Error loading content: " {e}</div>
                                        <A href="/" class="back-link">"\u{2190} Back to list"</A>
                                    }
                                        .into_view()
                                }
                            }
                        })
                }}

            </Suspense>
        </Layout>
    }
}

/// The create/edit form. One submission or delete may be in flight at a
/// time; the phase machine makes a second one a no-op and the buttons
/// are disabled while busy. A failed request keeps the draft intact.
#[component]
fn ProductForm(mode: FormMode) -> impl IntoView {
    let initial = match &mode {
        FormMode::Create => ProductDraft::default(),
        FormMode::Edit(detail) => ProductDraft::from_detail(detail),
    };
    let (existing_logo, existing_card) = match &mode {
        FormMode::Create => (None, None),
        FormMode::Edit(detail) => (
            Some(detail.logo_image.url.clone()),
            Some(detail.product_image.url.clone()),
        ),
    };
    let edit_mode = mode.is_edit();

    let mode = store_value(mode);
    let draft = create_rw_signal(initial);
    let phase = create_rw_signal(FormPhase::Editing);
    let (error, set_error) = create_signal(None::<String>);
    let navigate = use_navigate();

    let submittable = move || {
        draft.with(|d| mode.with_value(|m| d.is_submittable(m)))
    };
    let busy = move || phase.get().is_busy();

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            if phase.get_untracked().is_busy() || !submittable() {
                return;
            }
            phase.update(|p| *p = p.apply(FormEvent::Submit));
            set_error.set(None);

            let navigate = navigate.clone();
            let mode = mode.get_value();
            let draft = draft.get_untracked();
            spawn_local(async move {
                match submit_product(&mode, &draft).await {
                    Ok(message) => {
                        phase.update(|p| *p = p.apply(FormEvent::Finished));
                        notify(&message);
                        navigate("/", Default::default());
                    }
                    Err(message) => {
                        phase.update(|p| *p = p.apply(FormEvent::Failed));
                        set_error.set(Some(message));
                    }
                }
            });
        }
    };

    let on_delete = {
        let navigate = navigate.clone();
        move |_: ev::MouseEvent| {
            if phase.get_untracked().is_busy() {
                return;
            }
            if !confirm("Delete this content? This cannot be undone.") {
                return;
            }
            phase.update(|p| *p = p.apply(FormEvent::Delete));
            set_error.set(None);

            let navigate = navigate.clone();
            let id = mode.with_value(|m| match m {
                FormMode::Edit(detail) => detail.id.clone(),
                FormMode::Create => String::new(),
            });
            spawn_local(async move {
                match delete_product(&id).await {
                    Ok(()) => {
                        phase.update(|p| *p = p.apply(FormEvent::Finished));
                        notify("Content deleted.");
                        navigate("/", Default::default());
                    }
                    Err(message) => {
                        phase.update(|p| *p = p.apply(FormEvent::Failed));
                        set_error.set(Some(message));
                    }
                }
            });
        }
    };

    view! {
        <div class="form-wrapper">
            <div class="form-header">
                <A href="/" class="back-link">"\u{2190} Back to list"</A>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form on:submit=on_submit>
                <TextField
                    label="Title"
                    placeholder="Enter a title"
                    value=Signal::derive(move || draft.with(|d| d.title.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.title = v))
                />

                <ImageUpload
                    label="Logo Image"
                    id="logo-upload"
                    existing_url=existing_logo
                    on_select=Callback::new(move |sel| {
                        draft.update(|d| d.logo_image = Some(sel))
                    })
                />

                <TextField
                    label="Company"
                    placeholder="Enter the company name"
                    value=Signal::derive(move || draft.with(|d| d.company_name.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.company_name = v))
                />

                <TextField
                    label="Phone"
                    input_type="tel"
                    placeholder="010-0000-0000"
                    value=Signal::derive(move || draft.with(|d| d.phone_number.clone()))
                    on_input=Callback::new(move |v| draft.update(|d| d.phone_number = v))
                />

                <ImageUpload
                    label="Card Image"
                    id="card-upload"
                    existing_url=existing_card
                    on_select=Callback::new(move |sel| {
                        draft.update(|d| d.card_image = Some(sel))
                    })
                />

                <div class="form-field">
                    <label>"Content" <span class="required">"*"</span></label>
                    <textarea
                        rows=6
                        placeholder="Enter the content"
                        prop:value=move || draft.with(|d| d.content.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.content = event_target_value(&ev))
                        }
                    ></textarea>
                </div>

                <div class="form-field">
                    <label>"Status" <span class="required">"*"</span></label>
                    <select
                        prop:value=move || {
                            if draft.with(|d| d.is_active) { "true" } else { "false" }
                        }
                        on:change=move |ev| {
                            draft.update(|d| d.is_active = event_target_value(&ev) == "true")
                        }
                    >
                        <option value="true">"Active"</option>
                        <option value="false">"Inactive"</option>
                    </select>
                </div>

                <div class="form-field">
                    <div class="period-header">
                        <label>"Posting Period" <span class="required">"*"</span></label>
                        <div class="permanent-toggle">
                            <input
                                type="checkbox"
                                id="permanent"
                                prop:checked=move || draft.with(|d| d.is_permanent())
                                on:change=move |ev| {
                                    draft.update(|d| d.set_permanent(event_target_checked(&ev)))
                                }
                            />
                            <label for="permanent">"Always visible"</label>
                        </div>
                    </div>
                    <div class="date-range">
                        <input
                            type="date"
                            prop:value=move || draft.with(|d| d.start_date.clone())
                            prop:disabled=move || draft.with(|d| d.is_permanent())
                            on:input=move |ev| {
                                draft.update(|d| d.start_date = event_target_value(&ev))
                            }
                        />
                        <input
                            type="date"
                            prop:value=move || draft.with(|d| d.end_date.clone())
                            prop:disabled=move || draft.with(|d| d.is_permanent())
                            on:input=move |ev| {
                                draft.update(|d| d.end_date = event_target_value(&ev))
                            }
                        />
                    </div>
                </div>

                <div class="form-buttons">
                    {edit_mode
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="button button-secondary"
                                    disabled=busy
                                    on:click=on_delete.clone()
                                >
                                    {move || if busy() { "Working..." } else { "Delete" }}
                                </button>
                            }
                        })}

                    <button
                        type="submit"
                        class="button button-primary"
                        disabled=move || busy() || !submittable()
                    >
                        {move || {
                            if busy() {
                                "Working..."
                            } else if edit_mode {
                                "Save"
                            } else {
                                "Register"
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Single-line text input with label
#[component]
fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label>{label} <span class="required">"*"</span></label>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

/// Image picker with preview. Shows the freshly picked file when there
/// is one, the stored image in edit mode otherwise.
#[component]
fn ImageUpload(
    label: &'static str,
    id: &'static str,
    #[prop(optional_no_strip)] existing_url: Option<String>,
    on_select: Callback<ImageSelection>,
) -> impl IntoView {
    let (preview, set_preview) = create_signal(None::<String>);

    view! {
        <div class="form-field">
            <label for=id>{label} <span class="required">"*"</span></label>
            <div class="image-upload">
                <label for=id class="image-drop">
                    {move || {
                        let url = preview.get().or_else(|| existing_url.clone());
                        match url {
                            Some(url) => {
                                view! { <img class="image-preview" src=url/> }.into_view()
                            }
                            None => view! { <span class="image-placeholder">"+"</span> }.into_view(),
                        }
                    }}

                </label>
                <input
                    type="file"
                    accept="image/*"
                    id=id
                    class="hidden"
                    on:change=move |ev| handle_file_pick(&ev, on_select, set_preview)
                />
            </div>
        </div>
    }
}

/// Read the picked file into an [`ImageSelection`] and hand it to the
/// form, keeping an object URL around for the preview.
#[cfg(target_arch = "wasm32")]
fn handle_file_pick(
    ev: &ev::Event,
    on_select: Callback<ImageSelection>,
    set_preview: WriteSignal<Option<String>>,
) {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };

    if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
        set_preview.set(Some(url));
    }

    let file_name = file.name();
    spawn_local(async move {
        match gloo_file::futures::read_as_bytes(&file.into()).await {
            Ok(bytes) => on_select.call(ImageSelection { file_name, bytes }),
            Err(e) => logging::error!("failed to read selected file: {e}"),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn handle_file_pick(
    _ev: &ev::Event,
    _on_select: Callback<ImageSelection>,
    _set_preview: WriteSignal<Option<String>>,
) {
}

// =============================================================================
// Browser Dialogs
// =============================================================================

fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// =============================================================================
// API Fetching Functions
// =============================================================================

#[cfg(target_arch = "wasm32")]
fn api() -> (catalog::HttpClient, catalog::ApiConfig) {
    let config = catalog::ApiConfig::from_build_env();
    (catalog::HttpClient::new(config.clone()), config)
}

#[cfg(target_arch = "wasm32")]
async fn load_products(page: u32) -> Result<ProductListing, String> {
    let (client, _) = api();
    catalog::load_page(&client, page, catalog::PAGE_SIZE)
        .await
        .map_err(|e| e.to_string())
}

#[cfg(target_arch = "wasm32")]
async fn load_detail(id: &str) -> Result<catalog::ProductDetail, String> {
    let (client, _) = api();
    use catalog::ProductApi;
    client.get(id).await.map_err(|e| e.to_string())
}

#[cfg(target_arch = "wasm32")]
async fn submit_product(mode: &FormMode, draft: &ProductDraft) -> Result<String, String> {
    let (client, config) = api();
    catalog::submit_draft(&client, mode, draft, &config.company_id)
        .await
        .map(|_| {
            if mode.is_edit() {
                "Content saved.".to_string()
            } else {
                "Content registered.".to_string()
            }
        })
        .map_err(|e| e.to_string())
}

#[cfg(target_arch = "wasm32")]
async fn delete_product(id: &str) -> Result<(), String> {
    let (client, _) = api();
    use catalog::ProductApi;
    client.delete(id).await.map_err(|e| e.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_products(_page: u32) -> Result<ProductListing, String> {
    Err("browser only".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_detail(_id: &str) -> Result<catalog::ProductDetail, String> {
    Err("browser only".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn submit_product(_mode: &FormMode, _draft: &ProductDraft) -> Result<String, String> {
    Err("browser only".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn delete_product(_id: &str) -> Result<(), String> {
    Err("browser only".to_string())
}
