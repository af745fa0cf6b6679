use crate::{FACELET_COUNT, Facelet, PermutationTables, TableError, Twist};

impl PermutationTables {
    /// Checks that every twist is a bijection that only moves the facelets it
    /// affects, that opposite directions are inverses, and that every twist
    /// has order 3.
    pub fn validate(&self) -> Result<(), TableError> {
        for twist in Twist::iter_all() {
            let table = self.table(twist.section, twist.direction);
            let inverse = self.table(twist.section, twist.direction.rev());

            let mut seen = [false; FACELET_COUNT];
            for facelet in Facelet::iter() {
                let source = table[facelet.index()];
                if std::mem::replace(&mut seen[source.index()], true) {
                    return Err(TableError::NotBijective {
                        twist,
                        facelet: source,
                    });
                }
                if source != facelet && !facelet.position().is_affected_by(twist.section) {
                    return Err(TableError::NotLocal { twist, facelet });
                }
                if table[inverse[facelet.index()].index()] != facelet {
                    return Err(TableError::NotInverse { twist, facelet });
                }
                if table[table[source.index()].index()] != facelet {
                    return Err(TableError::NotOrderThree { twist, facelet });
                }
            }
        }
        Ok(())
    }
}
