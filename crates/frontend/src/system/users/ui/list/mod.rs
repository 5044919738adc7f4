mod state;

use contracts::system::access::{Action, PageKey};
use contracts::system::users::{filter_users, UserAccount};
use leptos::prelude::*;
use thaw::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireAction;
use crate::system::users::ui::details::CreateUserForm;
use state::{create_state, SortField};

#[component]
pub fn UserList() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let access = session.page_access(PageKey::Users);
    let state = create_state();
    let search_query = RwSignal::new(String::new());
    let (show_create, set_show_create) = signal(false);

    let rows = Memo::new(move |_| {
        let query = search_query.get();
        state.with(|s| {
            let mut items: Vec<UserAccount> =
                filter_users(&s.items, &query).into_iter().cloned().collect();
            s.sort(&mut items);
            items
        })
    });

    let active_count = Memo::new(move |_| state.with(|s| s.items.iter().filter(|u| u.is_active).count()));

    let on_created = Callback::new(move |account: UserAccount| {
        toast.success(format!("User {} created", account.name));
        state.update(|s| s.items.push(account));
        set_show_create.set(false);
    });
    let on_close = Callback::new(move |_: ()| set_show_create.set(false));

    let header = move |label: &'static str, field: SortField| {
        view! {
            <TableHeaderCell>
                <div
                    class="table__sortable"
                    on:click=move |_| state.update(|s| s.toggle_sort(field))
                >
                    {label}
                    {move || state.with(|s| s.sort_indicator(field))}
                </div>
            </TableHeaderCell>
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title=PageKey::Users.title()
                subtitle=Signal::derive(move || {
                    access.get().description(&format!(
                        "{} accounts, {} active",
                        state.with(|s| s.items.len()),
                        active_count.get()
                    ))
                })
            >
                <RequireAction page=PageKey::Users action=Action::ManageUsers>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}" Add User"
                    </Button>
                </RequireAction>
            </PageHeader>

            <div class="card">
                <div class="table-toolbar">
                    <Input value=search_query placeholder="Search by name or email..." />
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            {header("Name", SortField::Name)}
                            <TableHeaderCell>"Email"</TableHeaderCell>
                            {header("Role", SortField::Role)}
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            {header("Last Login", SortField::LastLogin)}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().map(|u| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <span class="user-cell">{icon("user")}{u.name}</span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell><TableCellLayout>{u.email}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <span class=u.role.badge_class()>{u.role.label()}</span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        {if u.is_active {
                                            view! { <span class="badge badge--success">"Active"</span> }
                                        } else {
                                            view! { <span class="badge badge--neutral">"Inactive"</span> }
                                        }}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{format_date_opt(u.last_login_at)}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>

            <Show when=move || show_create.get()>
                <CreateUserForm
                    existing=Signal::derive(move || state.with(|s| s.items.clone()))
                    on_close=on_close
                    on_created=on_created
                />
            </Show>
        </div>
    }
}
