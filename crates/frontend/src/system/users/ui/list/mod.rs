use contracts::shared::list_view::{FilterCriterion, SortSpec, StatusFilter};
use contracts::system::users::{perfil_label, User, UserStatus, USER_LIST};
use leptos::prelude::*;
use thaw::*;

use crate::shared::alert::{AlertBanner, AlertState};
use crate::shared::api_utils::upload_url;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::{ConfirmDialog, PageHeader, PaginationControls, StatusSwitch};
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::list_actions::ListActions;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::list_view::ListView;
use crate::shared::navigation::use_navigator;
use crate::system::users::api::UsersStore;

const DEFAULT_AVATAR: &str = "/default-avatar.png";

fn set_user_active(user: &mut User, active: bool) {
    user.status = if active {
        UserStatus::Active
    } else {
        UserStatus::Inactive
    };
}

#[component]
#[allow(non_snake_case)]
pub fn UsersListPage() -> impl IntoView {
    let navigator = use_navigator();
    let alert = AlertState::new();
    let list = ListView::<User>::new(USER_LIST);
    let actions = ListActions::<UsersStore>::new(list, alert);
    actions.reload();

    let criteria = Memo::new(move |_| list.criteria());
    let delete_target: RwSignal<Option<User>> = RwSignal::new(None);
    let delete_open = RwSignal::new(false);
    let bulk_open = RwSignal::new(false);

    let visible_ids = Signal::derive(move || list.visible_ids());
    let selected_visible = Signal::derive(move || {
        visible_ids.with(|ids| ids.iter().filter(|id| list.is_selected(id)).count())
    });

    view! {
        <div class="page">
            <AlertBanner state=alert />

            <PageHeader title="Utilizadores">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigator.go("/users/create")
                >
                    {icon("plus")}
                    " Novo Utilizador"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <SearchInput
                        value=Signal::derive(move || criteria.with(|c| c.text.clone()))
                        on_change=Callback::new(move |text| list.set_filter(FilterCriterion::Text(text)))
                        placeholder="Filtrar por nome ou email"
                    />
                    <select
                        class="form-select"
                        prop:value=move || criteria.with(|c| c.status.as_str())
                        on:change=move |ev| {
                            let status = StatusFilter::parse(&event_target_value(&ev));
                            list.set_filter(FilterCriterion::Status(status));
                        }
                    >
                        <option value="all">"Todos"</option>
                        <option value="active">"Ativos"</option>
                        <option value="inactive">"Inativos"</option>
                    </select>
                    <select
                        class="form-select"
                        prop:value=move || criteria.with(|c| c.field("perfil").to_string())
                        on:change=move |ev| list.set_filter(FilterCriterion::field("perfil", event_target_value(&ev)))
                    >
                        <option value="">"Todos Perfis"</option>
                        <option value="admin">"Admin"</option>
                        <option value="user">"Utilizador"</option>
                    </select>
                    <select
                        class="form-select"
                        prop:value=move || criteria.with(|c| c.sort.as_ref().map(SortSpec::to_option_value).unwrap_or_default())
                        on:change=move |ev| {
                            if let Some(spec) = SortSpec::from_option_value(&event_target_value(&ev)) {
                                list.set_sort(&spec.key, spec.direction);
                            }
                        }
                    >
                        <option value="name-asc">"Nome A-Z"</option>
                        <option value="name-desc">"Nome Z-A"</option>
                        <option value="email-asc">"Email A-Z"</option>
                        <option value="email-desc">"Email Z-A"</option>
                    </select>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| list.clear_filters()
                    >
                        "Limpar Filtros"
                    </Button>
                </Flex>
            </div>

            {move || actions.error.get().map(|e| view! { <div class="alert alert--danger">{e}</div> })}

            <Show
                when=move || !(actions.loading.get() && list.item_count() == 0)
                fallback=|| view! { <p class="loading">"A carregar utilizadores..."</p> }
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
                                <SortableHeaderCell
                                    label="Utilizador"
                                    sort_field="name"
                                    current_sort=Signal::derive(move || criteria.with(|c| c.sort.clone()))
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                    min_width=220.0
                                />
                                <SortableHeaderCell
                                    label="Email"
                                    sort_field="email"
                                    current_sort=Signal::derive(move || criteria.with(|c| c.sort.clone()))
                                    on_sort=Callback::new(move |field: String| list.toggle_sort(&field))
                                />
                                <TableHeaderCell resizable=false min_width=110.0>"Perfil"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Criado em"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Ações"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.page_rows()
                                key=|u: &User| (u.id.clone(), u.status.as_str())
                                children=move |user: User| {
                                    let id = user.id.clone();
                                    let id_for_check = user.id.clone();
                                    let id_for_toggle = user.id.clone();
                                    let id_for_edit = user.id.clone();
                                    let user_for_delete = user.clone();
                                    let active = user.status == UserStatus::Active;
                                    let photo = user
                                        .photo
                                        .as_deref()
                                        .filter(|p| !p.is_empty())
                                        .map(upload_url)
                                        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
                                    let name = user.name.clone();
                                    let email = user.email.clone();
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=id
                                                checked=Signal::derive(move || list.is_selected(&id_for_check))
                                                on_toggle=Callback::new(move |id: String| list.toggle_select(&id))
                                            />
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="user-cell">
                                                        <img class="user-cell__avatar" src=photo alt="Avatar" width="40" height="40" />
                                                        <strong>{move || criteria.with(|c| highlight_matches(&name, &c.text))}</strong>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || criteria.with(|c| highlight_matches(&email, &c.text))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{perfil_label(&user.perfil).to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusSwitch
                                                    active=active
                                                    on_toggle=Callback::new(move |current| {
                                                        actions.toggle_status(id_for_toggle.clone(), current, set_user_active)
                                                    })
                                                    disabled=Signal::derive(move || actions.busy.get())
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_opt_date(user.created_at.as_deref())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| navigator.go(format!("/users/edit/{}", id_for_edit))
                                                    >
                                                        {icon("edit")}
                                                        " Editar"
                                                    </Button>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| {
                                                            delete_target.set(Some(user_for_delete.clone()));
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
                        <p class="table-empty">"Nenhum utilizador encontrado."</p>
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
                        "Deseja eliminar o utilizador "
                        <strong>{delete_target.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default())}</strong>
                        "?"
                    </p>
                }
                on_confirm=Callback::new(move |_| {
                    if let Some(user) = delete_target.get_untracked() {
                        let message = format!("Utilizador \"{}\" eliminado com sucesso.", user.name);
                        actions.delete_one(user.id, message);
                    }
                })
            />

            <ConfirmDialog
                open=bulk_open
                title="Eliminar Selecionados"
                message=move || view! {
                    <p>
                        "Tem a certeza que deseja eliminar "
                        <strong>{list.selected_count()}</strong>
                        " utilizadores?"
                    </p>
                }
                on_confirm=Callback::new(move |_| actions.delete_selection())
            />
        </div>
    }
}
