#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Var(u32);

impl Var {
    pub fn new(i: i32) -> Self {
        assert!(i > 0, "variables are numbered starting at 1");
        assert!(i < (1 << 30), "variable index too large");

        Var(i as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Literals pack the variable and the polarity into a u32.
// The LSB is one iff the literal is negative; the remaining bits are the variable.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Lit(u32);

impl Lit {
    pub fn new(lit: i32) -> Self {
        assert_ne!(lit, 0, "literals cannot be zero");

        let var = Var::new(lit.abs());
        Lit((var.get() << 1) | ((lit < 0) as u32))
    }

    pub fn var(self) -> Var {
        Var(self.0 >> 1)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_pos(self) -> bool {
        self.0 & 1 == 0
    }

    #[allow(unused)]
    pub fn is_neg(self) -> bool {
        self.0 & 1 == 1
    }
}

impl From<Var> for Lit {
    fn from(v: Var) -> Self {
        Lit(v.0 << 1)
    }
}

impl std::ops::Neg for Lit {
    type Output = Lit;

    fn neg(self) -> Self::Output {
        Lit(self.0 ^ 1)
    }
}

impl std::fmt::Debug for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lit({self})")
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            if self.is_pos() { "" } else { "-" },
            self.var().get()
        )
    }
}
