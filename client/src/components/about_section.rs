//! "About" section, target of the `#about` nav anchor.

use leptos::prelude::*;

const ABOUT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1551076805-e1869033e561?q=80&w=2070&auto=format&fit=crop";

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about-section">
            <div class="about-image">
                <img src=ABOUT_IMAGE_URL alt="Sleep Study"/>
            </div>
            <div class="about-text">
                <h2>"About"</h2>
                <div class="about-text__body">
                    <p>
                        "Our platform utilizes a " <strong>"Multi-Model Ensemble"</strong>
                        " technique. By processing data through "
                        <strong>"Artificial Neural Networks (ANN)"</strong>
                        ", we simulate human-like pattern recognition to detect subtle irregularities in sleep cycles. Simultaneously, "
                        <strong>"Random Forest"</strong> " and "
                        <strong>"Support Vector Machines (SVM)"</strong>
                        " handle high-dimensional physiological data to ensure that factors like blood pressure and stress levels are weighted accurately, reducing the margin of error significantly compared to traditional manual screening."
                    </p>
                </div>
            </div>
        </section>
    }
}
