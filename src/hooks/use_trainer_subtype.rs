// ============================================================================
// USE TRAINER SUBTYPE - Tipo de instructor del usuario actual
// ============================================================================
// Captura sus propios errores: la vista muestra el fallo en línea.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::use_auth::use_auth_context;
use crate::models::TrainerSubtype;
use crate::services::ApiClient;

#[derive(Clone, PartialEq, Debug)]
pub enum TrainerSubtypeState {
    Loading,
    Ready(TrainerSubtype),
    Failed(String),
}

#[hook]
pub fn use_trainer_subtype() -> TrainerSubtypeState {
    let auth = use_auth_context();
    let state = use_state(|| TrainerSubtypeState::Loading);
    let user = auth
        .identity()
        .map(|identity| (identity.id.clone(), identity.token.clone()));

    {
        let state = state.clone();
        let logout = auth.logout.clone();
        use_effect_with(user, move |user| {
            // Si el componente se desmonta, la respuesta se descarta
            let mounted = Rc::new(Cell::new(true));

            match user.clone() {
                Some((user_id, token)) => {
                    state.set(TrainerSubtypeState::Loading);
                    let mounted = mounted.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = ApiClient::with_token(token).employee_by_user(&user_id).await;
                        if !mounted.get() {
                            log::debug!("Respuesta de tipo de instructor descartada");
                            return;
                        }
                        match result {
                            Ok(record) => {
                                let subtype = record.trainer_subtype();
                                log::info!("🏋️ Tipo de instructor: {:?}", subtype);
                                state.set(TrainerSubtypeState::Ready(subtype));
                            }
                            Err(e) => {
                                log::error!("❌ Error obteniendo el tipo de instructor: {}", e);
                                if e.is_session_expired() {
                                    logout.emit(());
                                }
                                state.set(TrainerSubtypeState::Failed(e.user_message()));
                            }
                        }
                    });
                }
                None => state.set(TrainerSubtypeState::Failed("No hay sesión activa".to_string())),
            }

            move || mounted.set(false)
        });
    }

    (*state).clone()
}
