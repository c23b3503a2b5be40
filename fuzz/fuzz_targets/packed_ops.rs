#![no_main]
use libfuzzer_sys::fuzz_target;
use pbvec::PackedBoolVec;

// Differential test: drive the packed vector and a plain Vec<bool>
// model through the same operation sequence and compare after each op.
fuzz_target!(|ops: Vec<(u8, u16, bool)>| {
    let mut v = PackedBoolVec::new();
    let mut model: Vec<bool> = Vec::new();

    for (op, raw_index, bit) in ops {
        match op % 6 {
            0 => {
                v.push(bit).unwrap();
                model.push(bit);
            }
            1 => {
                let popped = v.pop_one();
                assert_eq!(popped.ok(), model.pop());
            }
            2 => {
                if !model.is_empty() {
                    let index = raw_index as usize % model.len();
                    v.set(index, bit).unwrap();
                    model[index] = bit;
                }
            }
            3 => {
                let index = raw_index as usize % (model.len() + 1);
                v.insert(index, &[bit, !bit]).unwrap();
                model.insert(index, !bit);
                model.insert(index, bit);
            }
            4 => {
                if !model.is_empty() {
                    let index = raw_index as usize % model.len();
                    v.remove(index).unwrap();
                    model.remove(index);
                }
            }
            _ => {
                if !model.is_empty() {
                    let index = raw_index as usize % model.len();
                    assert_eq!(v.get(index).unwrap(), model[index]);
                }
            }
        }

        assert_eq!(v.len(), model.len());
        assert_eq!(v.size_bytes(), model.len().div_ceil(8));
        assert_eq!(v.to_vec(), model);
    }
});
