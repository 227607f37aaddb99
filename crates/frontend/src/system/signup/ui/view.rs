use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::model::SignupField;
use super::view_model::{SignupDeps, SignupViewModel};
use crate::routes::routes::LOGIN_PATH;
use crate::shared::icons::icon;
use crate::shared::notice::use_notices;

#[component]
pub fn SignupPage() -> impl IntoView {
    let vm = SignupViewModel::new(SignupDeps::browser(use_notices()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <section class="signup">
            <div class="signup__card">
                <div class="signup__header">
                    <h1 class="signup__title">"Sign Up"</h1>
                    <p class="signup__subtitle">"Create your account to start shopping"</p>
                </div>

                <form class="signup__form" on:submit=on_submit>
                    <div class="form__row">
                        <FieldInput vm=vm field=SignupField::FirstName />
                        <FieldInput vm=vm field=SignupField::LastName />
                    </div>

                    <FieldInput vm=vm field=SignupField::Email />

                    <div class="form__row">
                        <FieldInput vm=vm field=SignupField::CountryCode required=false />
                        <FieldInput vm=vm field=SignupField::Phone />
                    </div>

                    <FieldInput vm=vm field=SignupField::Address />

                    <div class="form__row">
                        <FieldInput vm=vm field=SignupField::City />
                        <FieldInput vm=vm field=SignupField::State />
                    </div>

                    <FieldInput vm=vm field=SignupField::Pincode />
                    <FieldInput vm=vm field=SignupField::Password />
                    <FieldInput vm=vm field=SignupField::ConfirmPassword />

                    <div class="form__group">
                        <label for=SignupField::CaptchaInput.name()>
                            {SignupField::CaptchaInput.label()}
                        </label>
                        <div class="captcha">
                            <div class="captcha__code">{move || vm.captcha()}</div>
                            <input
                                type="text"
                                id=SignupField::CaptchaInput.name()
                                name=SignupField::CaptchaInput.name()
                                placeholder=SignupField::CaptchaInput.placeholder()
                                autocomplete="off"
                                prop:value=move || vm.value(SignupField::CaptchaInput)
                                on:input=move |ev| vm.set_field(SignupField::CaptchaInput, event_target_value(&ev))
                                required
                            />
                            <button
                                type="button"
                                class="captcha__refresh"
                                on:click=move |_| vm.refresh_captcha()
                            >
                                {icon("refresh")}
                                " Refresh"
                            </button>
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || vm.submitting.get()
                    >
                        {move || if vm.submitting.get() { "Creating..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="signup__footer">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Login here"</a>
                </p>
            </div>
        </section>
    }
}

#[component]
fn FieldInput(
    vm: SignupViewModel,
    field: SignupField,
    #[prop(default = true)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label for=field.name()>{field.label()}</label>
            <input
                type=field.input_type()
                id=field.name()
                name=field.name()
                placeholder=field.placeholder()
                prop:value=move || vm.value(field)
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
                required=required
            />
        </div>
    }
}
