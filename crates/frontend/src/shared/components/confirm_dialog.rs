use leptos::prelude::*;
use thaw::*;

/// Modal confirmation with Cancelar / Confirmar.
///
/// `open` is owned by the caller; both buttons close the dialog.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)]
    title: String,
    /// Body content, rendered while the dialog is open
    #[prop(into)]
    message: ViewFn,
    on_confirm: Callback<()>,
    #[prop(optional, into)]
    confirm_label: Option<String>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Confirmar".to_string());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>{move || message.run()}</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            {confirm_label}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
