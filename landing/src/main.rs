// Green Innovations Institute landing page (Leptos 0.8 CSR)

fn main() {
    gii_landing::run();
}
