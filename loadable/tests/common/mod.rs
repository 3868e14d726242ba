use loadable::Loadable;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TestState {
    pub num: Loadable<String, u64>,
}

impl TestState {
    pub fn set_num(self, num: Loadable<String, u64>) -> Self {
        Self { num, ..self }
    }

    pub fn update_num<F>(self, f: F) -> Self
    where
        F: FnOnce(Loadable<String, u64>) -> Loadable<String, u64>,
    {
        let num = f(self.num.clone());
        self.set_num(num)
    }
}
