use contracts::domain::a001_recipe::{Recipe, RECIPE_LIST};
use contracts::shared::list_view::{FilterCriterion, ListCriteria, StatusFilter};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_recipe::api::RecipesStore;
use crate::shared::alert::{AlertBanner, AlertState};
use crate::shared::api_utils::upload_url;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::{ConfirmDialog, PageHeader, PaginationControls, StatusSwitch};
use crate::shared::icons::icon;
use crate::shared::list_actions::ListActions;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::list_view::ListView;
use crate::shared::navigation::use_navigator;
use crate::shared::storage;

/// localStorage key of the remembered filters
const CRITERIA_KEY: &str = "recipe_list_criteria";

fn set_recipe_active(recipe: &mut Recipe, active: bool) {
    recipe.status = Some(active);
}

fn persist_criteria(criteria: ListCriteria) {
    if criteria.is_neutral() {
        storage::remove(CRITERIA_KEY);
    } else {
        storage::save_json(CRITERIA_KEY, &criteria);
    }
}

/// Recipe catalogue at `/dashboard`
#[component]
#[allow(non_snake_case)]
pub fn RecipesListPage() -> impl IntoView {
    let navigator = use_navigator();
    let alert = AlertState::new();
    let list = ListView::<Recipe>::with_persistence(
        RECIPE_LIST,
        storage::load_json(CRITERIA_KEY),
        Callback::new(persist_criteria),
    );
    let actions = ListActions::<RecipesStore>::new(list, alert);
    actions.reload();

    let criteria = Memo::new(move |_| list.criteria());
    let delete_target: RwSignal<Option<Recipe>> = RwSignal::new(None);
    let delete_open = RwSignal::new(false);
    let bulk_open = RwSignal::new(false);

    let visible_ids = Signal::derive(move || list.visible_ids());
    let selected_visible = Signal::derive(move || {
        visible_ids.with(|ids| ids.iter().filter(|id| list.is_selected(id)).count())
    });

    view! {
        <div class="page">
            <AlertBanner state=alert />

            <PageHeader title="Receitas">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigator.go("/create")
                >
                    {icon("plus")}
                    " Nova Receita"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <SearchInput
                        value=Signal::derive(move || criteria.with(|c| c.text.clone()))
                        on_change=Callback::new(move |text| list.set_filter(FilterCriterion::Text(text)))
                        placeholder="Filtrar por nome..."
                    />
                    <select
                        class="form-select"
                        prop:value=move || criteria.with(|c| c.status.as_str())
                        on:change=move |ev| {
                            let status = StatusFilter::parse(&event_target_value(&ev));
                            list.set_filter(FilterCriterion::Status(status));
                        }
                    >
                        <option value="all">"Todos os status"</option>
                        <option value="active">"Ativo"</option>
                        <option value="inactive">"Inativo"</option>
                    </select>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.clear_filters()
                    >
                        "Limpar filtros"
                    </Button>
                </Flex>
            </div>

            {move || actions.error.get().map(|e| view! { <div class="alert alert--danger">{e}</div> })}

            <Show
                when=move || !(actions.loading.get() && list.item_count() == 0)
                fallback=|| view! { <p class="loading">"A carregar..."</p> }
            >
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCheckbox
                                    visible_ids=visible_ids
                                    selected_visible=selected_visible
                                    on_change=Callback::new(move |checked| list.toggle_select_all_visible(checked))
                                />
                                <TableHeaderCell resizable=false min_width=80.0>"Imagem"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Nome"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Categoria"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.page_rows()
                                key=|r: &Recipe| (r.id.clone(), r.is_active())
                                children=move |recipe: Recipe| {
                                    let id = recipe.id.clone();
                                    let id_for_check = recipe.id.clone();
                                    let id_for_toggle = recipe.id.clone();
                                    let id_for_edit = recipe.id.clone();
                                    let recipe_for_delete = recipe.clone();
                                    let active = recipe.is_active();
                                    let title = recipe.title.clone();
                                    let summary = recipe.summary_line();
                                    let category = recipe.category_label();
                                    let image = recipe.image.as_deref().filter(|i| !i.is_empty()).map(|name| {
                                        view! {
                                            <img class="list__thumb" src=upload_url(name) alt=recipe.title.clone() width="60" height="60" />
                                        }
                                    });
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=id
                                                checked=Signal::derive(move || list.is_selected(&id_for_check))
                                                on_toggle=Callback::new(move |id: String| list.toggle_select(&id))
                                            />
                                            <TableCell>
                                                {match image {
                                                    Some(img) => img.into_any(),
                                                    None => view! { <span class="text-muted">"Sem imagem"</span> }.into_any(),
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <strong>{move || criteria.with(|c| highlight_matches(&title, &c.text))}</strong>
                                                    <br />
                                                    <small>{summary}</small>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{category}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusSwitch
                                                    active=active
                                                    on_toggle=Callback::new(move |current| {
                                                        actions.toggle_status(id_for_toggle.clone(), current, set_recipe_active)
                                                    })
                                                    disabled=Signal::derive(move || actions.busy.get())
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| navigator.go(format!("/edit/{}", id_for_edit))
                                                    >
                                                        {icon("edit")}
                                                        " Editar"
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| {
                                                            delete_target.set(Some(recipe_for_delete.clone()));
                                                            delete_open.set(true);
                                                        }
                                                    >
                                                        {icon("delete")}
                                                        " Eliminar"
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>

                    <Show when=move || list.filtered_count() == 0>
                        <p class="table-empty">"Nenhuma receita encontrada."</p>
                    </Show>
                </div>
            </Show>

            <div class="list-footer">
                <Show when=move || list.can_bulk_delete()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="btn-danger"
                        on_click=move |_| bulk_open.set(true)
                        disabled=Signal::derive(move || actions.busy.get())
                    >
                        {move || format!("Eliminar todos ({})", list.selected_count())}
                    </Button>
                </Show>

                <PaginationControls
                    current_page=Signal::derive(move || list.current_page())
                    total_pages=Signal::derive(move || list.total_pages())
                    on_page_change=Callback::new(move |page| list.go_to_page(page))
                />
            </div>

            <ConfirmDialog
                open=delete_open
                title="Confirmação"
                message=move || view! {
                    <p>
                        "Deseja eliminar a receita "
                        <strong>{delete_target.with(|r| r.as_ref().map(|r| r.title.clone()).unwrap_or_default())}</strong>
                        "?"
                    </p>
                }
                on_confirm=Callback::new(move |_| {
                    if let Some(recipe) = delete_target.get_untracked() {
                        let message = format!("Receita \"{}\" eliminada com sucesso.", recipe.title);
                        actions.delete_one(recipe.id, message);
                    }
                })
            />

            <ConfirmDialog
                open=bulk_open
                title="Confirmar Eliminação"
                message=move || view! {
                    <p>
                        "Tem a certeza que deseja eliminar "
                        <strong>{list.selected_count()}</strong>
                        " receitas?"
                    </p>
                }
                on_confirm=Callback::new(move |_| actions.delete_selection())
            />
        </div>
    }
}
