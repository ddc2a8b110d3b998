use contracts::domain::a002_ingredient::{Ingredient, DEFAULT_COLOR, INGREDIENT_LIST, INGREDIENT_TYPES};
use contracts::shared::list_view::{FilterCriterion, StatusFilter};
use leptos::prelude::*;
use thaw::*;

use super::form::{IngredientFormPanel, SaveOutcome};
use crate::domain::a002_ingredient::api::IngredientsStore;
use crate::shared::alert::{AlertBanner, AlertState};
use crate::shared::api_utils::upload_url;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::ColorBadge;
use crate::shared::components::{ConfirmDialog, PageHeader, PaginationControls, StatusSwitch};
use crate::shared::icons::icon;
use crate::shared::list_actions::ListActions;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::list_view::ListView;

fn set_ingredient_active(ingredient: &mut Ingredient, active: bool) {
    ingredient.status = Some(active);
}

/// Ingredient catalogue at `/ingredientes`, with its inline form
#[component]
#[allow(non_snake_case)]
pub fn IngredientsListPage() -> impl IntoView {
    let alert = AlertState::new();
    let list = ListView::<Ingredient>::new(INGREDIENT_LIST);
    let actions = ListActions::<IngredientsStore>::new(list, alert);
    actions.reload();

    let criteria = Memo::new(move |_| list.criteria());
    let form_open = RwSignal::new(false);
    let editing: RwSignal<Option<Ingredient>> = RwSignal::new(None);
    let delete_target: RwSignal<Option<Ingredient>> = RwSignal::new(None);
    let delete_open = RwSignal::new(false);
    let bulk_open = RwSignal::new(false);

    let visible_ids = Signal::derive(move || list.visible_ids());
    let selected_visible = Signal::derive(move || {
        visible_ids.with(|ids| ids.iter().filter(|id| list.is_selected(id)).count())
    });

    let close_form = Callback::new(move |_: ()| {
        editing.set(None);
        form_open.set(false);
    });
    let on_saved = Callback::new(move |outcome: SaveOutcome| {
        match outcome {
            Ok(message) => {
                alert.success(message);
                actions.reload();
            }
            Err(e) => alert.danger(e),
        }
        close_form.run(());
    });

    view! {
        <div class="page">
            <AlertBanner state=alert />

            <Show
                when=move || !form_open.get()
                fallback=move || view! {
                    <IngredientFormPanel
                        editing=editing.get_untracked()
                        on_done=on_saved
                        on_cancel=close_form
                    />
                }
            >
                <PageHeader title="Ingredientes">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            editing.set(None);
                            form_open.set(true);
                        }
                    >
                        {icon("plus")}
                        " Novo Ingrediente"
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
                            prop:value=move || criteria.with(|c| c.field("type").to_string())
                            on:change=move |ev| list.set_filter(FilterCriterion::field("type", event_target_value(&ev)))
                        >
                            <option value="">"Filtrar por tipo"</option>
                            {INGREDIENT_TYPES
                                .iter()
                                .map(|kind| view! { <option value=*kind>{*kind}</option> })
                                .collect_view()}
                        </select>
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
                            "Limpar"
                        </Button>
                    </Flex>
                </div>

                {move || actions.error.get().map(|e| view! { <div class="alert alert--danger">{format!("Erro: {}", e)}</div> })}

                <Show
                    when=move || !(actions.loading.get() && list.item_count() == 0)
                    fallback=|| view! { <p class="loading">"A carregar ingredientes..."</p> }
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
                                    <TableHeaderCell resizable=false min_width=70.0>"Imagem"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=220.0>"Nome"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>"Cor"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=160.0>"Tipo"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=150.0>"Status"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Ações"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>

                            <TableBody>
                                <For
                                    each=move || list.page_rows()
                                    key=|i: &Ingredient| (i.id.clone(), i.is_active())
                                    children=move |ingredient: Ingredient| {
                                        let id = ingredient.id.clone();
                                        let id_for_check = ingredient.id.clone();
                                        let id_for_toggle = ingredient.id.clone();
                                        let ingredient_for_edit = ingredient.clone();
                                        let ingredient_for_delete = ingredient.clone();
                                        let active = ingredient.is_active();
                                        let name = ingredient.name.clone();
                                        let summary = ingredient.summary_line();
                                        let kind = ingredient.kind.clone();
                                        let color = ingredient.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string());
                                        let text_color = ingredient.text_color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string());
                                        let thumb = match ingredient.image.as_deref().filter(|i| !i.is_empty()) {
                                            Some(image) => view! {
                                                <img class="list__thumb" src=upload_url(image) alt=ingredient.name.clone() width="40" height="40" />
                                            }.into_any(),
                                            None => view! { <span class="text-muted">"Sem imagem"</span> }.into_any(),
                                        };
                                        view! {
                                            <TableRow>
                                                <TableCellCheckbox
                                                    item_id=id
                                                    checked=Signal::derive(move || list.is_selected(&id_for_check))
                                                    on_toggle=Callback::new(move |id: String| list.toggle_select(&id))
                                                />
                                                <TableCell>{thumb}</TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <strong>{move || criteria.with(|c| highlight_matches(&name, &c.text))}</strong>
                                                        <br />
                                                        <small>{summary}</small>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <ColorBadge color=color text_color=text_color />
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{kind}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <StatusSwitch
                                                        active=active
                                                        on_toggle=Callback::new(move |current| {
                                                            actions.toggle_status(id_for_toggle.clone(), current, set_ingredient_active)
                                                        })
                                                        disabled=Signal::derive(move || actions.busy.get())
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <Flex gap=FlexGap::Small>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| {
                                                                editing.set(Some(ingredient_for_edit.clone()));
                                                                form_open.set(true);
                                                            }
                                                        >
                                                            {icon("edit")}
                                                            " Editar"
                                                        </Button>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| {
                                                                delete_target.set(Some(ingredient_for_delete.clone()));
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
                            <p class="table-empty">"Nenhum ingrediente encontrado."</p>
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
            </Show>

            <ConfirmDialog
                open=delete_open
                title="Confirmação"
                message=move || view! {
                    <p>
                        "Deseja eliminar o ingrediente "
                        <strong>{delete_target.with(|i| i.as_ref().map(|i| i.name.clone()).unwrap_or_default())}</strong>
                        "?"
                    </p>
                }
                on_confirm=Callback::new(move |_| {
                    if let Some(ingredient) = delete_target.get_untracked() {
                        let message = format!("Ingrediente \"{}\" eliminado com sucesso.", ingredient.name);
                        actions.delete_one(ingredient.id, message);
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
                        " ingredientes?"
                    </p>
                }
                on_confirm=Callback::new(move |_| actions.delete_selection())
            />
        </div>
    }
}
