/*!
# Commands

Commands are only recognized when typed at the prompt. They can't
appear in a program.
*/

pub mod BYE {
    /*!
    ## `BYE` Leaves the interpreter. So does CTRL-D.
    */
}

pub mod CLEAR {
    /*!
    ## `CLEAR` Forgets all variables.
    The program is left alone.
    */
}

pub mod CONT {
    /*!
    ## `CONT` or `CONTINUE` Resumes a program paused by `STOP` or CTRL-C.
    Lines changed while the program was paused are not seen until the
    next `RUN`.
    */
}

pub mod DELETE {
    /*!
    ## `DELETE <line number>` Removes one line from the program.
    ```text
    10 PRINT 1
    DELETE 10
    DELETE 10
    ?Line not found: 10
    ```
    */
}

pub mod LIST {
    /*!
    ## `LIST` Shows the program in line number order.
    */
}

pub mod LOAD {
    /*!
    ## `LOAD "<filename>"` Replaces the program with one from a file.
    The file has one numbered line per text line. Blank lines are
    skipped. A line without a number is an error and nothing is loaded.
    */
}

pub mod NEW {
    /*!
    ## `NEW` Erases the program.
    Variables survive; use `CLEAR` for those.
    */
}

pub mod RUN {
    /*!
    ## `RUN` Runs the program from the lowest line number.
    Variables are kept from before.
    */
}

pub mod SAVE {
    /*!
    ## `SAVE "<filename>"` Writes the program to a file.
    The format is exactly what `LIST` shows.
    */
}
